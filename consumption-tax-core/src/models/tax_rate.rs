use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Consumption tax rates offered by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRate {
    /// 10%, the standard rate and the picker's initial selection.
    #[default]
    Standard,
    /// 8%, the reduced rate.
    Reduced,
}

/// Error returned when text does not name one of the [`TaxRate`] values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tax rate '{0}' (expected 10%, 8%, standard or reduced)")]
pub struct ParseTaxRateError(String);

impl TaxRate {
    /// Rates in the order the picker shows them.
    pub fn all() -> &'static [TaxRate] {
        &[TaxRate::Standard, TaxRate::Reduced]
    }

    /// The rate as a fraction, e.g. `0.10`.
    pub fn fraction(&self) -> Decimal {
        match self {
            Self::Standard => Decimal::new(10, 2),
            Self::Reduced => Decimal::new(8, 2),
        }
    }

    /// The multiplier that turns a price into its tax-inclusive amount.
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE + self.fraction()
    }

    /// [`TaxRate::multiplier`] in percent, e.g. `110`.
    pub fn multiplier_percent(&self) -> u16 {
        match self {
            Self::Standard => 110,
            Self::Reduced => 108,
        }
    }

    /// Picker label, e.g. `"10%"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "10%",
            Self::Reduced => "8%",
        }
    }
}

impl fmt::Display for TaxRate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaxRate {
    type Err = ParseTaxRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10" | "10%" | "0.10" | "0.1" | "standard" => Ok(Self::Standard),
            "8" | "8%" | "0.08" | "reduced" => Ok(Self::Reduced),
            _ => Err(ParseTaxRateError(s.to_string())),
        }
    }
}

impl TryFrom<&str> for TaxRate {
    type Error = ParseTaxRateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
