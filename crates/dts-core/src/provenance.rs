//! Provenance and schema descriptors shared across token sync artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every serialized artifact.
///
/// Carries no wall-clock timestamp; identical inputs serialize to identical
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunProvenance {
    /// Hash of the inputs used to produce the artifact.
    pub input_hash: String,
    /// Version map for all tools involved in the run.
    #[serde(default)]
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Creates provenance for the given input hash, recording one tool version.
    pub fn new(input_hash: impl Into<String>, tool: &str, version: &str) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(tool.to_string(), version.to_string());
        Self {
            input_hash: input_hash.into(),
            tool_versions,
        }
    }
}

/// Name and version of the external theming package used as reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePackage {
    /// Package name.
    pub name: String,
    /// Package version, `unknown` when not recorded.
    #[serde(default = "ThemePackage::unknown_version")]
    pub version: String,
}

impl ThemePackage {
    fn unknown_version() -> String {
        "unknown".to_string()
    }
}

impl Default for ThemePackage {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            version: Self::unknown_version(),
        }
    }
}
