use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{models::ValidationError, utils::group_digits};

/// A validated price: a non-negative decimal.
///
/// Values are only produced by [`Amount::try_new`] or
/// [`crate::parse_amount`], so holding an `Amount` proves it is not negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Wraps `value`, rejecting anything below zero.
    ///
    /// Negative zero is normalised to zero.
    pub fn try_new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_zero() {
            return Ok(Self(Decimal::ZERO));
        }
        if value.is_sign_negative() {
            return Err(ValidationError::Negative);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price with consumption tax added, floored to a whole currency unit.
///
/// Always integral and non-negative. `Display` renders it with comma
/// grouping, e.g. `1,100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaxInclusiveAmount(Decimal);

impl TaxInclusiveAmount {
    /// Floors a non-negative product to the unit below.
    pub(crate) fn from_product(product: Decimal) -> Self {
        let floored = product.floor();
        if floored.is_zero() {
            Self(Decimal::ZERO)
        } else {
            Self(floored)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount as an unsigned integer, or `None` when it exceeds `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

impl fmt::Display for TaxInclusiveAmount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&group_digits(&self.0.trunc().to_string()))
    }
}
