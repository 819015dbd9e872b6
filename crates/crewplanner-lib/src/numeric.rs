//! Normalization of loosely-typed numeric fields.
//!
//! Upstream records mix JSON numbers, grouped numeric strings and "unknown"
//! sentinels. Everything funnels through [`normalize_numeric`], which never
//! fails: anything that does not read as a finite number becomes `None`.

use crate::model::NumericField;

/// Sentinel strings (compared case-insensitively) that mean "value unknown".
pub const UNKNOWN_SENTINELS: [&str; 2] = ["unknown", "n/a"];

/// Normalize an optional loosely-typed field into an optional finite number.
///
/// ```
/// use crewplanner_lib::model::NumericField;
/// use crewplanner_lib::numeric::normalize_numeric;
///
/// assert_eq!(normalize_numeric(Some(&NumericField::from("1,234"))), Some(1234.0));
/// assert_eq!(normalize_numeric(Some(&NumericField::from("N/A"))), None);
/// assert_eq!(normalize_numeric(None), None);
/// ```
pub fn normalize_numeric(value: Option<&NumericField>) -> Option<f64> {
    match value? {
        NumericField::Number(n) => n.is_finite().then_some(*n),
        NumericField::Text(text) => normalize_numeric_str(text),
    }
}

/// Normalize a numeric string.
///
/// Thousands separators are stripped and the longest leading decimal literal
/// is parsed, so `"30-165"` reads as `30`.
pub fn normalize_numeric_str(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if UNKNOWN_SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
    {
        return None;
    }

    let stripped: String = trimmed.chars().filter(|c| *c != ',').collect();
    let literal = leading_decimal(&stripped)?;
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Slice off the longest prefix of `s` that forms a decimal literal
/// (`[+-]digits[.digits][(e|E)[+-]digits]`), requiring at least one mantissa digit.
fn leading_decimal(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&s[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<f64> {
        normalize_numeric(Some(&NumericField::from(s)))
    }

    #[test]
    fn numbers_pass_through() {
        for n in [0.0, 1.0, 0.5, 1234.0, 150_000_000.0, -3.25] {
            assert_eq!(normalize_numeric(Some(&NumericField::Number(n))), Some(n));
        }
    }

    #[test]
    fn string_and_grouped_forms_match_the_number() {
        for n in [0.0, 7.0, 1234.0, 3_500_000.0, 0.75] {
            assert_eq!(text(&n.to_string()), Some(n));
        }
        assert_eq!(text("1,234"), Some(1234.0));
        assert_eq!(text("1,000,000,000"), Some(1_000_000_000.0));
        assert_eq!(text("12,500.5"), Some(12_500.5));
    }

    #[test]
    fn sentinels_and_absent_are_none() {
        assert_eq!(text("unknown"), None);
        assert_eq!(text("Unknown"), None);
        assert_eq!(text("UNKNOWN"), None);
        assert_eq!(text("n/a"), None);
        assert_eq!(text("N/A"), None);
        assert_eq!(normalize_numeric(None), None);
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(text(""), None);
        assert_eq!(text("   "), None);
        assert_eq!(text("none"), None);
        assert_eq!(text("abc123"), None);
        assert_eq!(text("."), None);
        assert_eq!(text("-"), None);
    }

    #[test]
    fn leading_numeric_prefix_is_used() {
        assert_eq!(text("30-165"), Some(30.0));
        assert_eq!(text("  42 tons"), Some(42.0));
        assert_eq!(text("1.5e3"), Some(1500.0));
        assert_eq!(text("2e"), Some(2.0));
        assert_eq!(text(".5"), Some(0.5));
        assert_eq!(text("5."), Some(5.0));
        assert_eq!(text("-12"), Some(-12.0));
    }

    #[test]
    fn non_finite_values_are_none() {
        assert_eq!(normalize_numeric(Some(&NumericField::Number(f64::NAN))), None);
        assert_eq!(
            normalize_numeric(Some(&NumericField::Number(f64::INFINITY))),
            None
        );
        assert_eq!(text("1e400"), None);
    }
}
