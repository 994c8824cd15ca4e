use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a price entry is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationError {
    /// The text, with grouping separators removed, is not a decimal number.
    #[error("input is not a number")]
    NotANumber,

    /// The text parsed to a value below zero.
    #[error("input is negative")]
    Negative,
}

impl ValidationError {
    /// Message shown to the user in the error alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotANumber => "有効な数値を入力してください",
            Self::Negative => "正の数値を入力してください",
        }
    }
}
