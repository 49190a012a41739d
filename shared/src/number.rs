use crate::record::CellValue;

/// Parse a roster value such as `"2.5M"`, `"10"` or `"750k"` into a plain number.
///
/// Suffixes K/M/B/T (any case) scale by 10^3, 10^6, 10^9 and 10^12. Text that
/// does not have that shape falls back to its leading numeric prefix, and to 0
/// when there is none.
pub fn parse_formatted_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) if n.is_nan() => 0.0,
        CellValue::Number(n) => *n,
        CellValue::Text(text) => parse_formatted_str(text),
    }
}

pub fn parse_formatted_str(text: &str) -> f64 {
    let trimmed = text.trim();
    if let Some((mantissa, multiplier)) = split_magnitude(trimmed) {
        return leading_float(mantissa).map_or(0.0, |n| n * multiplier);
    }
    leading_float(trimmed).unwrap_or(0.0)
}

/// Split `"<digits and dots><ws><suffix?>"` into mantissa and multiplier.
fn split_magnitude(text: &str) -> Option<(&str, f64)> {
    let last = text.chars().last()?;
    let (body, multiplier) = match last.to_ascii_uppercase() {
        'K' => (&text[..text.len() - 1], 1e3),
        'M' => (&text[..text.len() - 1], 1e6),
        'B' => (&text[..text.len() - 1], 1e9),
        'T' => (&text[..text.len() - 1], 1e12),
        _ => (text, 1.0),
    };
    let mantissa = body.trim_end();
    if mantissa.is_empty() || !mantissa.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    Some((mantissa, multiplier))
}

/// Longest leading float literal: optional sign, digits with at most one dot,
/// optional exponent. `"1.2.3"` reads as 1.2, `"12 pts"` as 12.
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if saw_digit || frac > end + 1 {
            end = frac;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let digits_at = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_at {
            end = exp;
        }
    }

    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_formatted_number, parse_formatted_str};
    use crate::record::CellValue;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-6,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    #[test]
    fn plain_numbers() {
        assert_close(parse_formatted_str("10"), 10.0);
        assert_close(parse_formatted_str(" 3.75 "), 3.75);
    }

    #[test]
    fn magnitude_suffixes() {
        assert_close(parse_formatted_str("2.5M"), 2_500_000.0);
        assert_close(parse_formatted_str("1K"), 1_000.0);
        assert_close(parse_formatted_str("750k"), 750_000.0);
        assert_close(parse_formatted_str("4 b"), 4_000_000_000.0);
        assert_close(parse_formatted_str("1.5T"), 1_500_000_000_000.0);
    }

    #[test]
    fn garbage_parses_as_zero() {
        assert_eq!(parse_formatted_str("abc"), 0.0);
        assert_eq!(parse_formatted_str(""), 0.0);
        assert_eq!(parse_formatted_str("K"), 0.0);
        assert_eq!(parse_formatted_str("."), 0.0);
    }

    #[test]
    fn falls_back_to_leading_prefix() {
        assert_close(parse_formatted_str("12 pts"), 12.0);
        assert_close(parse_formatted_str("-3"), -3.0);
        assert_close(parse_formatted_str("1,000"), 1.0);
        assert_close(parse_formatted_str("1.2.3M"), 1_200_000.0);
        assert_close(parse_formatted_str("2e3x"), 2_000.0);
    }

    #[test]
    fn numeric_cells_pass_through() {
        assert_close(parse_formatted_number(&CellValue::Number(42.0)), 42.0);
        assert_eq!(parse_formatted_number(&CellValue::Number(f64::NAN)), 0.0);
        assert_close(parse_formatted_number(&CellValue::text("2M")), 2_000_000.0);
    }
}
