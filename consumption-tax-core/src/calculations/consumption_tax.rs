//! Tax-inclusive price calculation.
//!
//! # Steps
//!
//! | Step | Operation | Failure |
//! |------|-----------|---------|
//! | 1    | Remove grouping commas and surrounding whitespace | |
//! | 2    | Parse a decimal (plain or scientific notation) | `NotANumber` |
//! | 3    | Reject values below zero | `Negative` |
//! | 4    | Multiply by `1 + rate` and floor to a whole currency unit | |
//! | 5    | Render with comma grouping | |
//!
//! The fraction dropped in step 4 is a policy choice: 99 at 8% is 106.92 and
//! the customer pays 106. The floor is exact at every scale `Decimal` holds.
//!
//! # Range
//!
//! Amounts are [`Decimal`]s. Text larger than [`Decimal::MAX`] does not parse
//! and is reported as `NotANumber`; a product above [`Decimal::MAX`]
//! saturates to it. Scientific notation with an exponent below `-28`
//! underflows to zero.
//!
//! # Example
//!
//! ```
//! use consumption_tax_core::{TaxRate, calculate};
//!
//! let display = calculate("1,000", TaxRate::Standard);
//!
//! assert_eq!(display.amount_display, "1,000");
//! assert_eq!(display.tax_inclusive_display, "1,100");
//! assert!(display.error.is_none());
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    calculations::common::floor_mul_percent,
    models::{Amount, DisplayState, ErrorMessage, TaxInclusiveAmount, TaxRate, ValidationError},
    utils::{format_with_grouping, normalize_amount_input},
};

/// Parses a price typed into the form.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation (e.g. `"1e3"`). Empty input is not a number.
///
/// # Errors
///
/// - [`ValidationError::NotANumber`] when the text is not a decimal
/// - [`ValidationError::Negative`] when the value is below zero
pub fn parse_amount(text: &str) -> Result<Amount, ValidationError> {
    let normalized = normalize_amount_input(text);
    let value = parse_decimal(&normalized).ok_or_else(|| {
        warn!(input = %text, "rejected amount: not a number");
        ValidationError::NotANumber
    })?;
    Amount::try_new(value).inspect_err(|_| {
        warn!(input = %text, "rejected amount: negative");
    })
}

/// Smallest exponent whose power of ten `Decimal` can still hold.
const MIN_EXPONENT: i64 = -28;

fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

fn parse_decimal(normalized: &str) -> Option<Decimal> {
    if normalized.is_empty() || !normalized.chars().all(is_decimal_char) {
        return None;
    }
    match normalized.split_once(['e', 'E']) {
        None => Decimal::from_str(normalized).ok(),
        Some((mantissa, exponent)) => {
            let mantissa = Decimal::from_str(mantissa).ok()?;
            let exponent: i64 = exponent.parse().ok()?;
            if exponent < MIN_EXPONENT {
                // |mantissa| < 10^29, so the value is below one and floors to zero.
                debug!(%mantissa, exponent, "amount underflows to zero");
                Some(Decimal::ZERO)
            } else {
                Decimal::from_scientific(normalized).ok()
            }
        }
    }
}

/// Adds consumption tax to `amount` and floors the result.
///
/// ```
/// use consumption_tax_core::{TaxRate, compute_tax_inclusive, parse_amount};
///
/// let amount = parse_amount("99").unwrap();
/// let total = compute_tax_inclusive(amount, TaxRate::Reduced);
///
/// assert_eq!(total.to_u64(), Some(106)); // floor(106.92)
/// ```
pub fn compute_tax_inclusive(
    amount: Amount,
    rate: TaxRate,
) -> TaxInclusiveAmount {
    let product = floor_mul_percent(amount.value(), rate.multiplier_percent());
    TaxInclusiveAmount::from_product(product)
}

/// Parses `text` and computes its tax-inclusive amount at `rate`.
pub fn compute(
    text: &str,
    rate: TaxRate,
) -> Result<TaxInclusiveAmount, ValidationError> {
    let amount = parse_amount(text)?;
    let total = compute_tax_inclusive(amount, rate);
    debug!(%amount, %rate, %total, "computed tax-inclusive amount");
    Ok(total)
}

/// Runs the whole calculation and builds what the form should show.
///
/// Validation failures are reported in [`DisplayState::error`] and leave the
/// tax-inclusive display empty.
pub fn calculate(
    text: &str,
    rate: TaxRate,
) -> DisplayState {
    let amount_display = format_with_grouping(text);
    match compute(text, rate) {
        Ok(total) => DisplayState {
            amount_display,
            tax_inclusive_display: total.to_string(),
            error: None,
        },
        Err(kind) => DisplayState {
            amount_display,
            tax_inclusive_display: String::new(),
            error: Some(ErrorMessage::from(kind)),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn amount(value: Decimal) -> Amount {
        Amount::try_new(value).unwrap()
    }

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_plain_integer() {
        assert_eq!(parse_amount("1000").unwrap().value(), dec!(1000));
    }

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap().value(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567").unwrap().value(), dec!(1234567));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap().value(), dec!(123.45));
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1e3").unwrap().value(), dec!(1000));
        assert_eq!(parse_amount("2.5E-1").unwrap().value(), dec!(0.25));
    }

    #[test]
    fn parse_amount_underflows_tiny_exponents_to_zero() {
        assert_eq!(parse_amount("1e-999").unwrap().value(), Decimal::ZERO);
        assert_eq!(parse_amount("-1e-999").unwrap().value(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_rejects_exponent_overflow() {
        assert_eq!(parse_amount("1e999"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn parse_amount_accepts_zero() {
        assert_eq!(parse_amount("0").unwrap().value(), Decimal::ZERO);
        assert_eq!(parse_amount("-0").unwrap().value(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_empty_is_not_a_number() {
        assert_eq!(parse_amount(""), Err(ValidationError::NotANumber));
        assert_eq!(parse_amount("   "), Err(ValidationError::NotANumber));
        assert_eq!(parse_amount(","), Err(ValidationError::NotANumber));
    }

    #[test]
    fn parse_amount_rejects_text() {
        for text in ["abc", "12a", "1.2.3", "--5", "¥100", "1_000", "1__0", "1e", "e3", "1e3.5"] {
            assert_eq!(parse_amount(text), Err(ValidationError::NotANumber), "{text:?}");
        }
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert_eq!(parse_amount("-5"), Err(ValidationError::Negative));
        assert_eq!(parse_amount("-1,000"), Err(ValidationError::Negative));
        assert_eq!(parse_amount("-0.01"), Err(ValidationError::Negative));
    }

    // =========================================================================
    // compute_tax_inclusive tests
    // =========================================================================

    #[test]
    fn compute_standard_rate_whole_result() {
        let result = compute_tax_inclusive(amount(dec!(100)), TaxRate::Standard);

        assert_eq!(result.value(), dec!(110));
    }

    #[test]
    fn compute_reduced_rate_floors_fraction() {
        let result = compute_tax_inclusive(amount(dec!(99)), TaxRate::Reduced);

        assert_eq!(result.value(), dec!(106));
    }

    #[test]
    fn compute_floors_fractional_input() {
        let result = compute_tax_inclusive(amount(dec!(0.99)), TaxRate::Standard);

        assert_eq!(result.value(), dec!(1));
    }

    #[test]
    fn compute_small_amount_floors_to_zero() {
        let result = compute_tax_inclusive(amount(dec!(0.5)), TaxRate::Reduced);

        assert_eq!(result.value(), Decimal::ZERO);
        assert_eq!(result.to_string(), "0");
    }

    #[test]
    fn compute_floors_exactly_at_full_precision() {
        let just_below_one = amount(dec!(0.9259259259259259259259259259));

        let result = compute_tax_inclusive(just_below_one, TaxRate::Reduced);

        assert_eq!(result.value(), Decimal::ZERO);
    }

    #[test]
    fn compute_saturates_at_decimal_max() {
        let result = compute_tax_inclusive(amount(Decimal::MAX), TaxRate::Standard);

        assert_eq!(result.value(), Decimal::MAX);
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_success_fills_both_displays() {
        let display = calculate("999", TaxRate::Reduced);

        assert_eq!(
            display,
            DisplayState {
                amount_display: "999".to_string(),
                tax_inclusive_display: "1,078".to_string(),
                error: None,
            }
        );
    }

    #[test]
    fn calculate_failure_carries_error_message() {
        let display = calculate("-5", TaxRate::Standard);

        assert_eq!(display.amount_display, "-5");
        assert_eq!(display.tax_inclusive_display, "");
        assert_eq!(display.error, Some(ErrorMessage::from(ValidationError::Negative)));
    }

    #[test]
    fn calculate_passes_fractional_amount_display_through() {
        let display = calculate("1,234.5", TaxRate::Standard);

        assert_eq!(display.amount_display, "1,234.5");
        assert_eq!(display.tax_inclusive_display, "1,357");
    }
}
