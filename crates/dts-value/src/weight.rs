/// Numeric string for a named font weight; expects lower-case input.
pub fn named_weight(name: &str) -> Option<&'static str> {
    match name {
        "regular" => Some("400"),
        "medium" => Some("500"),
        "semibold" => Some("600"),
        "bold" => Some("700"),
        _ => None,
    }
}
