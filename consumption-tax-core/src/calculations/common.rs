//! Exact decimal arithmetic shared by the calculations.
//!
//! [`Decimal`] multiplication rounds to 28 fractional digits, which can push
//! a product sitting just below a whole number up onto it. The helpers here
//! work on the mantissa directly so the floor is taken before any rounding.

use rust_decimal::Decimal;

/// Returns `floor(value * percent / 100)` without intermediate rounding.
///
/// `value` must not be negative. Results above [`Decimal::MAX`] saturate to
/// it.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use consumption_tax_core::calculations::common::floor_mul_percent;
///
/// assert_eq!(floor_mul_percent(dec!(99), 108), dec!(106));
/// assert_eq!(floor_mul_percent(dec!(0.9259259259259259259259259259), 108), dec!(0));
/// ```
pub fn floor_mul_percent(
    value: Decimal,
    percent: u16,
) -> Decimal {
    // mantissa < 2^96 and percent < 2^16, so the product fits in i128;
    // scale <= 28, so the divisor is at most 10^30.
    let numerator = value.mantissa() * i128::from(percent);
    let divisor = 10i128.pow(value.scale() + 2);
    let quotient = numerator.div_euclid(divisor);

    if quotient > Decimal::MAX.mantissa() {
        Decimal::MAX
    } else {
        Decimal::from_i128_with_scale(quotient, 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn floor_mul_percent_whole_result() {
        assert_eq!(floor_mul_percent(dec!(100), 110), dec!(110));
    }

    #[test]
    fn floor_mul_percent_drops_fraction() {
        assert_eq!(floor_mul_percent(dec!(999), 108), dec!(1078));
    }

    #[test]
    fn floor_mul_percent_handles_scaled_input() {
        assert_eq!(floor_mul_percent(dec!(1234.50), 110), dec!(1357));
    }

    #[test]
    fn floor_mul_percent_stays_below_whole_number_at_full_precision() {
        let result = floor_mul_percent(dec!(0.9259259259259259259259259259), 108);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn floor_mul_percent_crosses_whole_number_at_full_precision() {
        let result = floor_mul_percent(dec!(0.9090909090909090909090909091), 110);

        assert_eq!(result, dec!(1));
    }

    #[test]
    fn floor_mul_percent_handles_zero() {
        assert_eq!(floor_mul_percent(Decimal::ZERO, 108), Decimal::ZERO);
    }

    #[test]
    fn floor_mul_percent_saturates() {
        assert_eq!(floor_mul_percent(Decimal::MAX, 110), Decimal::MAX);
    }

    #[test]
    fn floor_mul_percent_keeps_decimal_max_at_one_hundred_percent() {
        assert_eq!(floor_mul_percent(Decimal::MAX, 100), Decimal::MAX);
    }
}
