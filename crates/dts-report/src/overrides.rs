//! Override artifact consumed by the theming layer and the verification gate.

use std::collections::BTreeMap;

use dts_core::{Mode, PerMode, SchemaVersion, SyncError, ThemePackage};
use dts_map::custom_token_key;
use serde::{Deserialize, Serialize};

use crate::hash::stable_hash_string;
use crate::report::SyncReport;

/// Metadata of a custom key ported from an unmapped path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOverride {
    /// Source token path.
    pub token_path: String,
    /// Ported value.
    pub value: String,
}

/// Mapped themes merged with custom keys for every unmapped path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideArtifact {
    /// Artifact schema version.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Hash of the report the artifact was generated from.
    #[serde(default)]
    pub source_report_hash: String,
    /// Package the reference theme came from.
    #[serde(default)]
    pub reference_package: ThemePackage,
    /// Key to value table per mode, custom keys included.
    #[serde(default)]
    pub modes: PerMode<BTreeMap<String, String>>,
    /// Custom keys per mode with their source path.
    #[serde(default)]
    pub custom_modes: PerMode<BTreeMap<String, CustomOverride>>,
}

/// Builds the override artifact for `report`, naming custom keys with `prefix`.
pub fn build_overrides(report: &SyncReport, prefix: &str) -> Result<OverrideArtifact, SyncError> {
    let source_report_hash = stable_hash_string(report)?;
    let custom_modes = PerMode::from_fn(|mode| custom_overrides(report, mode, prefix));
    let modes = PerMode::from_fn(|mode| {
        let mut theme = report.mapped_themes.get(mode).clone();
        for (key, custom) in custom_modes.get(mode) {
            theme.insert(key.clone(), custom.value.clone());
        }
        theme
    });
    Ok(OverrideArtifact {
        schema_version: SchemaVersion::default(),
        source_report_hash,
        reference_package: report.reference_package.clone(),
        modes,
        custom_modes,
    })
}

fn custom_overrides(
    report: &SyncReport,
    mode: Mode,
    prefix: &str,
) -> BTreeMap<String, CustomOverride> {
    report
        .unmapped_for(mode)
        .map(|record| {
            (
                custom_token_key(prefix, &record.path),
                CustomOverride {
                    token_path: record.path.clone(),
                    value: record.effective_value().to_string(),
                },
            )
        })
        .collect()
}
