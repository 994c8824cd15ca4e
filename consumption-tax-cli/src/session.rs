//! Line-driven interactive form.
//!
//! Each input line becomes one [`FormEvent`]; the form is redrawn after
//! every event. Lines starting with `:` are commands, anything else is the
//! new content of the price field.

use std::io::{BufRead, Write};

use anyhow::Result;
use consumption_tax_core::{FormEvent, FormState, ParseTaxRateError, TaxRate, reduce};
use thiserror::Error;
use tracing::{debug, info};

use crate::views::{HELP, TaxFormView};

const PROMPT: &str = "> ";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Event(FormEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command ':{0}' (type :help)")]
    Unknown(String),

    #[error(":rate needs a value, e.g. :rate 8")]
    MissingRate,

    #[error(transparent)]
    Rate(#[from] ParseTaxRateError),
}

/// Interpret one line of input, without its line terminator.
pub fn parse_line(line: &str) -> Result<SessionCommand, CommandError> {
    if line.trim().is_empty() {
        return Ok(SessionCommand::Event(FormEvent::CalculateRequested));
    }

    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(SessionCommand::Event(FormEvent::InputChanged(
            line.to_string(),
        )));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "calc" => Ok(SessionCommand::Event(FormEvent::CalculateRequested)),
        "clear" => Ok(SessionCommand::Event(FormEvent::InputChanged(String::new()))),
        "rate" if arg.is_empty() => Err(CommandError::MissingRate),
        "rate" => Ok(SessionCommand::Event(FormEvent::RateSelected(
            arg.parse::<TaxRate>()?,
        ))),
        "ok" => Ok(SessionCommand::Event(FormEvent::ErrorDismissed)),
        "show" => Ok(SessionCommand::Show),
        "help" => Ok(SessionCommand::Help),
        "quit" | "q" => Ok(SessionCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn render<W: Write>(
    out: &mut W,
    state: &FormState,
) -> Result<()> {
    writeln!(out, "{}", TaxFormView::new(state))?;
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}

/// Run the form until `:quit` or end of input and return the final state.
pub fn run<R: BufRead, W: Write>(
    initial: FormState,
    input: R,
    out: &mut W,
) -> Result<FormState> {
    info!(rate = %initial.rate(), "starting interactive form");
    let mut state = initial;
    render(out, &state)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(SessionCommand::Event(event)) => {
                state = reduce(&state, event);
                render(out, &state)?;
            }
            Ok(SessionCommand::Show) => render(out, &state)?,
            Ok(SessionCommand::Help) => {
                writeln!(out, "{HELP}")?;
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            Ok(SessionCommand::Quit) => break,
            Err(err) => {
                debug!(%line, %err, "ignored input line");
                writeln!(out, "! {err}")?;
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
        }
    }

    writeln!(out)?;
    Ok(state)
}
