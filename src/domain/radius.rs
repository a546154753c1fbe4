//! Radius parsing

use std::borrow::Cow;

use crate::domain::DomainError;

/// Parse the radius typed by the user.
///
/// Surrounding whitespace is ignored and single underscores between digits are
/// accepted as separators (`1_000.5`). `inf`, `infinity` and `nan` are valid in
/// any case with an optional sign. No range check is applied: negative, zero and
/// non-finite radii are returned as parsed.
pub fn parse_radius(text: &str) -> Result<f64, DomainError> {
    let normalized = strip_digit_separators(text.trim());
    normalized
        .parse::<f64>()
        .map_err(|source| DomainError::InvalidRadius {
            input: text.to_string(),
            source,
        })
}

/// Remove `_` separators when each one sits between two ASCII digits.
///
/// Misplaced separators are left in place so the float parser rejects the text.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });

    if well_placed {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2", 2.0)]
    #[case("0", 0.0)]
    #[case("-3", -3.0)]
    #[case("2.5", 2.5)]
    #[case(" 4 ", 4.0)]
    #[case("\t1.25\r", 1.25)]
    #[case(".5", 0.5)]
    #[case("5.", 5.0)]
    #[case("+7", 7.0)]
    #[case("1e3", 1000.0)]
    #[case("1E-2", 0.01)]
    #[case("1_000", 1000.0)]
    #[case("1_000.000_5", 1000.0005)]
    #[case("1e1_0", 1e10)]
    #[case("inf", f64::INFINITY)]
    #[case("-Infinity", f64::NEG_INFINITY)]
    fn test_parse_radius_accepts(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_radius(text).unwrap(), expected);
    }

    #[test]
    fn test_parse_radius_accepts_nan() {
        assert!(parse_radius("nan").unwrap().is_nan());
        assert!(parse_radius("-NaN").unwrap().is_nan());
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("   ")]
    #[case("2,5")]
    #[case("0x10")]
    #[case("_1")]
    #[case("1_")]
    #[case("1__0")]
    #[case("1_.5")]
    #[case("1 2")]
    #[case("two")]
    fn test_parse_radius_rejects(#[case] text: &str) {
        let err = parse_radius(text).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRadius { .. }));
    }

    #[test]
    fn test_parse_radius_error_keeps_original_text() {
        let err = parse_radius(" abc").unwrap_err();
        assert_eq!(err.to_string(), "could not convert string to float: ' abc'");
    }
}
