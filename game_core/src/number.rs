//! Attribute string to number coercion.
//!
//! Canvas attributes arrive as strings and are converted the way the browser's
//! `Number(value)` does it, so a page that worked with plain script keeps the
//! same numbers here. Anything that does not parse becomes NaN; nothing fails.

/// Convert an optional attribute value to a number.
///
/// `None` (attribute absent) yields NaN.
pub fn to_number(value: Option<&str>) -> f64 {
    match value {
        Some(s) => parse_number(s),
        None => f64::NAN,
    }
}

/// Parse a string with `Number(string)` semantics.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix_value) = parse_prefixed_integer(s) {
        return radix_value;
    }

    // Rust's float parser also takes "inf", "nan" and "infinity" in any case;
    // only plain decimal notation is valid here.
    let decimal_only = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_only {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x`, `0o` and `0b` literals. Returns `None` when no prefix is present.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    // Accumulate in f64 so long literals lose precision instead of overflowing
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_number("3"), 3.0);
        assert_eq!(parse_number("-7"), -7.0);
        assert_eq!(parse_number("+12"), 12.0);
    }

    #[test]
    fn test_decimals_and_exponents() {
        assert_eq!(parse_number("2.5"), 2.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2E-1"), 0.2);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_number("  10\n"), 10.0);
        assert_eq!(parse_number("\t4 "), 4.0);
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_missing_is_nan() {
        assert!(to_number(None).is_nan());
    }

    #[test]
    fn test_infinity_spellings() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("+Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("infinity").is_nan());
    }

    #[test]
    fn test_malformed_is_nan() {
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("12px").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("1e").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("1 2").is_nan());
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert!(parse_number("0x").is_nan());
        assert!(parse_number("0b102").is_nan());
        assert!(parse_number("-0x10").is_nan());
    }

    #[test]
    fn test_leading_zero_is_decimal() {
        assert_eq!(parse_number("010"), 10.0);
        assert_eq!(parse_number("0"), 0.0);
    }
}
