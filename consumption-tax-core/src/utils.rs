//! Text helpers shared by parsing and display.

/// Thousands separator used for display and stripped before parsing.
pub const GROUPING_SEPARATOR: char = ',';

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
pub(crate) fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(GROUPING_SEPARATOR, "")
}

/// Inserts a comma every three digits, counting from the right.
///
/// `digits` must be a run of ASCII digits with no sign.
pub(crate) fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an integer string with comma grouping and no decimal places.
///
/// Existing commas are removed first, so `"1000"` and `"1,0,00"` both become
/// `"1,000"`. Text that is not a 64-bit integer after that (fractions,
/// letters, the empty string) is returned unchanged.
///
/// ```
/// use consumption_tax_core::format_with_grouping;
///
/// assert_eq!(format_with_grouping("1234567"), "1,234,567");
/// assert_eq!(format_with_grouping("-1234"), "-1,234");
/// assert_eq!(format_with_grouping("12.5"), "12.5");
/// ```
pub fn format_with_grouping(text: &str) -> String {
    let stripped = text.replace(GROUPING_SEPARATOR, "");
    match stripped.parse::<i64>() {
        Ok(value) => {
            let grouped = group_digits(&value.unsigned_abs().to_string());
            if value < 0 {
                format!("-{grouped}")
            } else {
                grouped
            }
        }
        Err(_) => text.to_string(),
    }
}
