//! Human-readable number formatting shared by diagnostics and the CLI.

/// Format an integer with thousand separators (commas).
///
/// ```
/// use crewplanner_lib::format::format_with_separators;
///
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Insert a comma between every group of three digits in an unsigned decimal string.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a quantity with thousand separators and at most three decimals.
///
/// Trailing zero decimals are dropped, so whole numbers render without a
/// fractional part. The integer part is printed from the float itself, so
/// magnitudes beyond `u64` stay exact.
///
/// ```
/// use crewplanner_lib::format::format_quantity;
///
/// assert_eq!(format_quantity(3_500_000.0), "3,500,000");
/// assert_eq!(format_quantity(1234.5), "1,234.5");
/// assert_eq!(format_quantity(0.1234), "0.123");
/// assert_eq!(format_quantity(3.0e16), "30,000,000,000,000,000");
/// ```
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut millis = ((magnitude - whole) * 1000.0).round();
    if millis >= 1000.0 {
        whole += 1.0;
        millis = 0.0;
    }

    let mut out = String::new();
    if value < 0.0 && (whole > 0.0 || millis > 0.0) {
        out.push('-');
    }
    out.push_str(&group_digits(&format!("{whole:.0}")));
    if millis > 0.0 {
        let decimals = format!("{millis:03.0}");
        out.push('.');
        out.push_str(decimals.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_for_small_and_large_values() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(100), "100");
        assert_eq!(format_with_separators(10_000), "10,000");
        assert_eq!(format_with_separators(100_000), "100,000");
        assert_eq!(format_with_separators(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn quantity_rounds_to_three_decimals() {
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(50.0), "50");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(2.9999), "3");
        assert_eq!(format_quantity(0.0004), "0");
        assert_eq!(format_quantity(1_000_000.25), "1,000,000.25");
    }

    #[test]
    fn quantity_beyond_u64_is_exact() {
        assert_eq!(format_quantity(2.0e16), "20,000,000,000,000,000");
        assert_eq!(format_quantity(1.0e20), "100,000,000,000,000,000,000");
        assert_eq!(format_quantity(-3.0e16), "-30,000,000,000,000,000");
        assert_eq!(format_quantity(2f64.powi(64)), "18,446,744,073,709,551,616");
    }

    #[test]
    fn fraction_carries_into_the_integer_part() {
        assert_eq!(format_quantity(999.9999), "1,000");
        assert_eq!(format_quantity(-0.0001), "0");
    }

    #[test]
    fn quantity_keeps_the_sign() {
        assert_eq!(format_quantity(-1500.0), "-1,500");
    }
}
