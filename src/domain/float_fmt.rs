//! Rendering and rounding of floats for the report
//!
//! Numbers are shown in shortest round-trip form, always with a decimal point
//! for integral values (`2.0`), switching to scientific notation outside the
//! decimal exponent range `[-4, 16)` (`1e+16`, `1.5e-05`).

/// Lowest decimal exponent still rendered positionally.
const POSITIONAL_MIN_EXP: i32 = -4;
/// First decimal exponent rendered in scientific notation.
const POSITIONAL_MAX_EXP: i32 = 16;

/// Render `value` in shortest round-trip form.
///
/// # Examples
/// ```
/// use circle_area::domain::format_float;
///
/// assert_eq!(format_float(2.0), "2.0");
/// assert_eq!(format_float(12.57), "12.57");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(0.00001), "1e-05");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{sign}0.0");
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let body = if (POSITIONAL_MIN_EXP..POSITIONAL_MAX_EXP).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        scientific(&digits, exponent)
    };
    format!("{sign}{body}")
}

/// Round `value` to `places` decimals, ties to even on the exact binary value.
///
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Fixed-precision formatting rounds the exact binary expansion correctly.
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Significant digits and decimal exponent of a positive finite value.
///
/// `12.566370614359172` yields `("12566370614359172", 1)`.
fn shortest_digits(value: f64) -> (String, i32) {
    let rendered = format!("{value:e}");
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let exponent = exponent.parse().unwrap_or(0);
    (mantissa.replace('.', ""), exponent)
}

fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

fn scientific(digits: &str, exponent: i32) -> String {
    let (head, tail) = digits.split_at(1);
    let mantissa = if tail.is_empty() {
        head.to_string()
    } else {
        format!("{head}.{tail}")
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, "2.0")]
    #[case(-3.0, "-3.0")]
    #[case(0.0, "0.0")]
    #[case(-0.0, "-0.0")]
    #[case(4.0, "4.0")]
    #[case(0.5, "0.5")]
    #[case(std::f64::consts::PI, "3.141592653589793")]
    #[case(12.566370614359172, "12.566370614359172")]
    #[case(100.0, "100.0")]
    #[case(0.0001, "0.0001")]
    #[case(0.00001, "1e-05")]
    #[case(0.000123, "0.000123")]
    #[case(1.5e-7, "1.5e-07")]
    #[case(9999999999999998.0, "9999999999999998.0")]
    #[case(1e16, "1e+16")]
    #[case(1.2345678901234568e17, "1.2345678901234568e+17")]
    #[case(1e155, "1e+155")]
    #[case(5e-324, "5e-324")]
    #[case(f64::INFINITY, "inf")]
    #[case(f64::NEG_INFINITY, "-inf")]
    #[case(f64::NAN, "nan")]
    fn test_format_float(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_float(value), expected);
    }

    #[rstest]
    #[case(12.566370614359172, 12.57)]
    #[case(28.274333882308138, 28.27)]
    #[case(0.0, 0.0)]
    #[case(0.125, 0.12)]
    #[case(0.375, 0.38)]
    #[case(2.675, 2.67)]
    #[case(1e20, 1e20)]
    fn test_round_to_two_places(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_to(value, 2), expected);
    }

    #[test]
    fn test_round_to_keeps_non_finite() {
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_shortest_digits() {
        assert_eq!(shortest_digits(12.566370614359172), ("12566370614359172".to_string(), 1));
        assert_eq!(shortest_digits(0.05), ("5".to_string(), -2));
    }
}
