//! Comparison-only canonical forms.
//!
//! Two values are "the same" for conflict and delta detection exactly when
//! their canonical strings are equal. Canonical strings are never written to
//! an output artifact.

use crate::family::KeyFamily;
use crate::number::{format_alpha, format_number, parse_decimal, parse_finite};
use crate::weight::named_weight;

/// Canonical form of `value` for the key family implied by `key`.
pub fn canonical_for_key(key: &str, value: &str) -> String {
    canonical(KeyFamily::of(key), value)
}

/// Canonical form of `value` within `family`.
pub fn canonical(family: KeyFamily, value: &str) -> String {
    let raw = canonical_text(value);
    match family {
        KeyFamily::Color => canonical_color(&raw),
        family if family.is_length() => canonical_length(&raw).unwrap_or(raw),
        KeyFamily::FontWeight => named_weight(&raw).map(str::to_string).unwrap_or(raw),
        _ => raw,
    }
}

/// Family-agnostic canonical form: lower-cased with all whitespace removed.
pub fn canonical_text(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn canonical_length(raw: &str) -> Option<String> {
    let number = raw.strip_suffix("px").unwrap_or(raw);
    parse_decimal(number).map(format_number)
}

/// Canonical color: `rgb(r,g,b)` for opaque inputs (including an explicit
/// alpha of 1), `rgba(r,g,b,a)` otherwise, `rgba(0,0,0,0)` for `transparent`.
pub fn canonical_color(value: &str) -> String {
    let raw = canonical_text(value);
    if raw == "transparent" {
        return "rgba(0,0,0,0)".to_string();
    }
    if let Some(hex) = raw.strip_prefix('#') {
        if let Some(canonical) = hex_color(hex) {
            return canonical;
        }
    }
    functional_color(&raw).unwrap_or(raw)
}

fn hex_color(hex: &str) -> Option<String> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let channel = |idx: usize| u8::from_str_radix(&expanded[idx * 2..idx * 2 + 2], 16).ok();
    let rgb = [channel(0)?, channel(1)?, channel(2)?].map(|c| c.to_string());
    let alpha = match expanded.len() {
        8 => Some(format_alpha(f64::from(channel(3)?) / 255.0)),
        _ => None,
    };
    Some(color_string(&rgb, alpha))
}

fn functional_color(raw: &str) -> Option<String> {
    let body = raw
        .strip_prefix("rgba(")
        .or_else(|| raw.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let channels = body
        .split(',')
        .map(parse_finite)
        .collect::<Option<Vec<f64>>>()?;
    let rgb = |red: f64, green: f64, blue: f64| [red, green, blue].map(format_number);
    match channels.as_slice() {
        [red, green, blue] => Some(color_string(&rgb(*red, *green, *blue), None)),
        [red, green, blue, alpha] => Some(color_string(
            &rgb(*red, *green, *blue),
            Some(format_alpha(*alpha)),
        )),
        _ => None,
    }
}

/// Opaque colors always render as `rgb(..)`, whatever alpha they spelled out.
fn color_string(rgb: &[String; 3], alpha: Option<String>) -> String {
    let [red, green, blue] = rgb;
    match alpha {
        Some(alpha) if alpha != "1" => format!("rgba({red},{green},{blue},{alpha})"),
        _ => format!("rgb({red},{green},{blue})"),
    }
}
