use serde::{Deserialize, Serialize};

/// Value family of a canonical key, derived from its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyFamily {
    /// `color*` keys.
    Color,
    /// `spacing*` keys.
    Spacing,
    /// `borderRadius*` keys.
    BorderRadius,
    /// `strokeWidth*` keys.
    StrokeWidth,
    /// `fontSize*` keys.
    FontSize,
    /// `lineHeight*` keys.
    LineHeight,
    /// `fontWeight*` keys.
    FontWeight,
    /// `fontFamily*` keys.
    FontFamily,
    /// Any other key, compared as plain text.
    Other,
}

const PREFIXES: [(&str, KeyFamily); 8] = [
    ("color", KeyFamily::Color),
    ("spacing", KeyFamily::Spacing),
    ("borderRadius", KeyFamily::BorderRadius),
    ("strokeWidth", KeyFamily::StrokeWidth),
    ("fontSize", KeyFamily::FontSize),
    ("lineHeight", KeyFamily::LineHeight),
    ("fontWeight", KeyFamily::FontWeight),
    ("fontFamily", KeyFamily::FontFamily),
];

impl KeyFamily {
    /// Classifies a canonical key by its prefix.
    pub fn of(key: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix))
            .map(|(_, family)| *family)
            .unwrap_or(KeyFamily::Other)
    }

    /// True for families whose values are pixel lengths.
    pub fn is_length(&self) -> bool {
        matches!(
            self,
            KeyFamily::Spacing
                | KeyFamily::BorderRadius
                | KeyFamily::StrokeWidth
                | KeyFamily::FontSize
                | KeyFamily::LineHeight
        )
    }

    /// Stable camelCase name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFamily::Color => "color",
            KeyFamily::Spacing => "spacing",
            KeyFamily::BorderRadius => "borderRadius",
            KeyFamily::StrokeWidth => "strokeWidth",
            KeyFamily::FontSize => "fontSize",
            KeyFamily::LineHeight => "lineHeight",
            KeyFamily::FontWeight => "fontWeight",
            KeyFamily::FontFamily => "fontFamily",
            KeyFamily::Other => "other",
        }
    }
}
