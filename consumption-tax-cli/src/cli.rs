use std::path::PathBuf;

use clap::{Parser, Subcommand};
use consumption_tax_core::TaxRate;

use crate::config::{AppConfig, ConfigError};

/// Consumption tax calculator.
///
/// Adds 10% or 8% consumption tax to a price and shows the tax-inclusive
/// amount, floored to a whole yen.
#[derive(Debug, Parser)]
#[command(name = "consumption-tax", version)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Tax rate: 10%, 8%, standard or reduced.
    #[arg(long, global = true)]
    pub rate: Option<TaxRate>,

    /// Log filter directive, e.g. `debug` or `consumption_tax_core=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Do not write log records to stderr.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the tax-inclusive amount for a single price.
    Calc {
        /// Price, optionally with comma separators (e.g. `1,000`).
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Run the interactive form (default).
    Form,
}

impl Cli {
    /// Merge the config file (if any) with flags given on the command line.
    ///
    /// Flags win over the file, and the file wins over built-in defaults.
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(rate) = self.rate {
            config.default_rate = rate;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if self.quiet {
            config.log_console = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("consumption-tax").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_subcommand_means_form() {
        let cli = parse(&[]);

        assert_eq!(cli.command, None);
        assert_eq!(cli.resolve_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn calc_accepts_grouped_amount_and_rate() {
        let cli = parse(&["calc", "1,000", "--rate", "8%"]);

        assert_eq!(
            cli.command,
            Some(Command::Calc {
                amount: "1,000".to_string()
            })
        );
        assert_eq!(cli.rate, Some(TaxRate::Reduced));
    }

    #[test]
    fn calc_accepts_negative_amount_as_value() {
        let cli = parse(&["calc", "-5"]);

        assert_eq!(
            cli.command,
            Some(Command::Calc {
                amount: "-5".to_string()
            })
        );
    }

    #[test]
    fn unknown_rate_is_rejected() {
        let result = Cli::try_parse_from(["consumption-tax", "--rate", "5"]);

        assert!(result.is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "--rate",
            "reduced",
            "--log-level",
            "debug",
            "--log-file",
            "tax.log",
            "--quiet",
        ]);

        let config = cli.resolve_config().unwrap();

        assert_eq!(
            config,
            AppConfig {
                default_rate: TaxRate::Reduced,
                log_level: "debug".to_string(),
                log_file: Some(PathBuf::from("tax.log")),
                log_console: false,
            }
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["--config", "does-not-exist.toml"]);

        assert!(matches!(cli.resolve_config(), Err(ConfigError::Read { .. })));
    }
}
