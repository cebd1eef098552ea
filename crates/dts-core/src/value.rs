//! Scalar values carried by token leaves and reference tables.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Raw scalar carried by a token leaf or a reference table entry.
///
/// Numbers keep their JSON representation so that `8` and `8.0` survive a
/// load/serialize cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Numeric literal such as `8` or `1.5`.
    Number(Number),
    /// String literal, possibly a `{dotted.path}` reference.
    Text(String),
}

impl TokenValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        TokenValue::Text(value.into())
    }

    /// Creates a numeric value from an integer.
    pub fn int(value: i64) -> Self {
        TokenValue::Number(Number::from(value))
    }

    /// Returns the referenced token path when the value has the exact form
    /// `{dotted.path}`.
    pub fn reference(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => {
                let inner = text.strip_prefix('{')?.strip_suffix('}')?;
                if inner.is_empty() || inner.contains(['{', '}']) {
                    None
                } else {
                    Some(inner)
                }
            }
            TokenValue::Number(_) => None,
        }
    }

    /// Returns true when the value is a numeric literal.
    pub fn is_number(&self) -> bool {
        matches!(self, TokenValue::Number(_))
    }

    /// Returns the numeric value when the literal is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TokenValue::Number(number) => number.as_f64(),
            TokenValue::Text(_) => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(number) => write!(f, "{number}"),
            TokenValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        TokenValue::int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_syntax_requires_braces_on_both_ends() {
        assert_eq!(TokenValue::text("{a.b}").reference(), Some("a.b"));
        assert_eq!(TokenValue::text("{a.b").reference(), None);
        assert_eq!(TokenValue::text("{}").reference(), None);
        assert_eq!(TokenValue::text("#fff").reference(), None);
        assert_eq!(TokenValue::int(4).reference(), None);
    }

    #[test]
    fn numbers_display_like_json() {
        let value: TokenValue = serde_json::from_str("8").unwrap();
        assert_eq!(value.to_string(), "8");
        let value: TokenValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(value.to_string(), "1.5");
        let value: TokenValue = serde_json::from_str("\"12px\"").unwrap();
        assert_eq!(value, TokenValue::text("12px"));
    }
}
