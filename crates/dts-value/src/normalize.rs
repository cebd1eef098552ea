//! Output-ready normalization of resolved token values.

use dts_core::TokenValue;

use crate::family::KeyFamily;
use crate::number::parse_decimal;
use crate::weight::named_weight;

/// Normalizes a resolved value for the canonical key `key`.
///
/// Unitless lengths gain `px`, named font weights become numeric strings,
/// everything else passes through trimmed.
pub fn normalize(key: &str, value: &TokenValue) -> String {
    let family = KeyFamily::of(key);
    match value {
        TokenValue::Number(number) if family.is_length() => format!("{number}px"),
        TokenValue::Number(number) => number.to_string(),
        TokenValue::Text(text) => normalize_text(family, text.trim()),
    }
}

fn normalize_text(family: KeyFamily, text: &str) -> String {
    if family == KeyFamily::FontWeight {
        if let Some(weight) = named_weight(&text.to_lowercase()) {
            return weight.to_string();
        }
    }
    if family.is_length() && parse_decimal(text).is_some() {
        return format!("{text}px");
    }
    text.to_string()
}
