use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// A rejected entry together with the text the alert shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub kind: ValidationError,
    pub message: String,
}

impl From<ValidationError> for ErrorMessage {
    fn from(kind: ValidationError) -> Self {
        Self {
            kind,
            message: kind.user_message().to_string(),
        }
    }
}

/// What the form renders after a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// The entered price, regrouped when it is a plain integer.
    pub amount_display: String,
    /// The grouped tax-inclusive amount, or empty when there is none to show.
    pub tax_inclusive_display: String,
    pub error: Option<ErrorMessage>,
}

impl DisplayState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
