use serde::{Deserialize, Serialize};

/// Exceptions that let otherwise fatal duplicates and unmapped paths pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowlist {
    /// Duplicate token paths that are tolerated.
    #[serde(default)]
    pub allowed_duplicate_token_paths: Vec<String>,
    /// Unmapped token paths tolerated by exact match.
    #[serde(default)]
    pub allowed_unmapped_exact: Vec<String>,
    /// Unmapped token paths tolerated by prefix.
    #[serde(default)]
    pub allowed_unmapped_prefixes: Vec<String>,
}

impl Allowlist {
    /// True when a duplicate of `path` is tolerated.
    pub fn allows_duplicate(&self, path: &str) -> bool {
        self.allowed_duplicate_token_paths.iter().any(|allowed| allowed == path)
    }

    /// True when `path` may stay unmapped.
    pub fn allows_unmapped(&self, path: &str) -> bool {
        self.allowed_unmapped_exact.iter().any(|allowed| allowed == path)
            || self
                .allowed_unmapped_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_paths_match_exactly_or_by_prefix() {
        let allowlist = Allowlist {
            allowed_unmapped_exact: vec!["light.Neutral.Card.Background".into()],
            allowed_unmapped_prefixes: vec!["dark.Data viz.".into()],
            ..Allowlist::default()
        };
        assert!(allowlist.allows_unmapped("light.Neutral.Card.Background"));
        assert!(!allowlist.allows_unmapped("light.Neutral.Card.Background.Hover"));
        assert!(allowlist.allows_unmapped("dark.Data viz.Series 1"));
        assert!(!allowlist.allows_unmapped("light.Data viz.Series 1"));
        assert!(!allowlist.allows_duplicate("Spacing.Horizontal.M"));
    }
}
