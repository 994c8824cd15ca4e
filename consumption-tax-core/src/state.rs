//! Form state for the consumption tax screen.
//!
//! The state is an immutable value. Every user action is a [`FormEvent`],
//! and [`reduce`] returns the next state without touching the previous one,
//! so a front end only has to render [`FormState::display`] after each event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    calculations::compute,
    models::{DisplayState, ErrorMessage, TaxInclusiveAmount, TaxRate},
    utils::format_with_grouping,
};

/// Whether the tax-inclusive line shows a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Something the user did on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The price field now holds this text.
    InputChanged(String),
    /// A rate was picked. Does not recalculate.
    RateSelected(TaxRate),
    /// The Calculate button was pressed.
    CalculateRequested,
    /// The error alert was acknowledged.
    ErrorDismissed,
}

/// Everything the form needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    input: String,
    rate: TaxRate,
    result: Option<TaxInclusiveAmount>,
    visibility: ResultVisibility,
    error: Option<ErrorMessage>,
}

impl FormState {
    /// Create an empty form with `rate` preselected.
    pub fn new(rate: TaxRate) -> Self {
        Self {
            rate,
            ..Default::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn rate(&self) -> TaxRate {
        self.rate
    }

    /// The last successful result, kept until the input is cleared.
    pub fn result(&self) -> Option<TaxInclusiveAmount> {
        self.result
    }

    pub fn visibility(&self) -> ResultVisibility {
        self.visibility
    }

    pub fn is_result_visible(&self) -> bool {
        self.visibility == ResultVisibility::Shown
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    /// Build the strings the form shows for this state.
    pub fn display(&self) -> DisplayState {
        let tax_inclusive_display = match (self.visibility, self.result) {
            (ResultVisibility::Shown, Some(total)) => total.to_string(),
            _ => String::new(),
        };
        DisplayState {
            amount_display: format_with_grouping(&self.input),
            tax_inclusive_display,
            error: self.error.clone(),
        }
    }
}

/// Apply `event` to `state` and return the resulting state.
///
/// Visibility moves to [`ResultVisibility::Shown`] only on a successful
/// calculation and back to [`ResultVisibility::Hidden`] only when the input
/// becomes empty.
pub fn reduce(
    state: &FormState,
    event: FormEvent,
) -> FormState {
    debug!(?event, "form event");
    match event {
        FormEvent::InputChanged(input) if input.is_empty() => FormState {
            input,
            result: None,
            visibility: ResultVisibility::Hidden,
            ..state.clone()
        },
        FormEvent::InputChanged(input) => FormState {
            input,
            ..state.clone()
        },
        FormEvent::RateSelected(rate) => FormState {
            rate,
            ..state.clone()
        },
        FormEvent::CalculateRequested => match compute(&state.input, state.rate) {
            Ok(total) => FormState {
                result: Some(total),
                visibility: ResultVisibility::Shown,
                error: None,
                ..state.clone()
            },
            Err(kind) => FormState {
                error: Some(ErrorMessage::from(kind)),
                ..state.clone()
            },
        },
        FormEvent::ErrorDismissed => FormState {
            error: None,
            ..state.clone()
        },
    }
}
