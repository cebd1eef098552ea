//! Key naming helpers.

/// Default prefix for keys of unmapped paths ported as custom overrides.
pub const DEFAULT_CUSTOM_PREFIX: &str = "cic";

/// Upper-cases the first letter of every word; words are separated by
/// whitespace, `-` or `.`. The rest of each word is kept as written.
pub fn to_pascal_case(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '-' || c == '.')
        .filter(|word| !word.is_empty())
        .flat_map(|word| {
            let mut chars = word.chars();
            let first = chars.next().into_iter().flat_map(char::to_uppercase);
            first.chain(chars)
        })
        .collect()
}

/// Deterministic custom key for a mode token path: the prefix followed by
/// every segment after the mode segment in PascalCase.
///
/// `light.Neutral.Card.Background` with prefix `cic` becomes
/// `cicNeutralCardBackground`.
pub fn custom_token_key(prefix: &str, token_path: &str) -> String {
    let mut key = prefix.to_string();
    for segment in token_path.split('.').skip(1) {
        key.push_str(&to_pascal_case(segment));
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_splits_on_spaces_and_dashes() {
        assert_eq!(to_pascal_case("light alpha"), "LightAlpha");
        assert_eq!(to_pascal_case("dark-red"), "DarkRed");
        assert_eq!(to_pascal_case("X-Large"), "XLarge");
        assert_eq!(to_pascal_case("on Brand"), "OnBrand");
        assert_eq!(to_pascal_case("  "), "");
        assert_eq!(to_pascal_case("10"), "10");
    }

    #[test]
    fn custom_keys_drop_the_mode_segment() {
        assert_eq!(
            custom_token_key(DEFAULT_CUSTOM_PREFIX, "dark.Neutral.Card.Background.Hover"),
            "cicNeutralCardBackgroundHover"
        );
        assert_eq!(
            custom_token_key("x", "light.Data viz.Series-1"),
            "xDataVizSeries1"
        );
    }
}
