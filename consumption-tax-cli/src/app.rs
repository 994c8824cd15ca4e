use std::io::{BufRead, Write};

use anyhow::Result;
use consumption_tax_core::{FormState, TaxRate, calculate};
use tracing::{info, warn};

use crate::{cli::Command, config::AppConfig, session};

/// Print the tax-inclusive amount of `amount` at `rate`.
///
/// A rejected amount is returned as an error carrying the user-facing
/// message.
pub fn run_calc<W: Write>(
    amount: &str,
    rate: TaxRate,
    out: &mut W,
) -> Result<()> {
    let result = calculate(amount, rate);
    if let Some(error) = result.error {
        warn!(kind = ?error.kind, "calculation rejected");
        anyhow::bail!("{}", error.message);
    }

    info!(%rate, amount = %result.amount_display, "calculated");
    writeln!(out, "{}", result.tax_inclusive_display)?;
    Ok(())
}

/// Dispatch `command` using the rate from `config`.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    config: &AppConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Calc { amount } => run_calc(&amount, config.default_rate, out),
        Command::Form => {
            session::run(FormState::new(config.default_rate), input, out)?;
            Ok(())
        }
    }
}
