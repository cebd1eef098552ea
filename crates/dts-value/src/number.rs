//! Decimal parsing and formatting helpers.

/// Parses text matching `-?\d+(\.\d+)?` exactly.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }
    text.parse().ok()
}

/// Parses a loosely formatted finite number such as a color channel.
pub fn parse_finite(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || text.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e') {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a number in its shortest decimal form: no trailing `.0`, no
/// negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Rounds to four decimal places and formats without trailing zeros.
pub fn format_alpha(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    format_number((value * 10_000.0).round() / 10_000.0)
}
