//! Comparison of computed tables against the reference theme.

use dts_value::{canonical_text, same_value};
use serde::{Deserialize, Serialize};

use crate::aggregate::ModeTable;
use crate::reference::ReferenceTable;

/// A key whose computed value differs canonically from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaRecord {
    /// Canonical theme key.
    pub key: String,
    /// Token path the computed value came from.
    pub provenance: String,
    /// Computed normalized value.
    pub computed_value: String,
    /// Reference value.
    pub reference_value: String,
}

/// A computed key the reference theme does not define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownThemeKey {
    /// Canonical theme key.
    pub key: String,
    /// Computed normalized value.
    pub value: String,
    /// Token path the value came from.
    pub provenance: String,
}

/// Delta block of one mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDelta {
    /// Keys in the computed table.
    pub mapped_token_count: usize,
    /// Keys in the reference table.
    pub theme_token_count: usize,
    /// Length of `deltas`.
    pub delta_count: usize,
    /// Canonical mismatches, sorted by key.
    pub deltas: Vec<DeltaRecord>,
    /// Keys missing from the reference, sorted by key.
    pub unknown_theme_keys: Vec<UnknownThemeKey>,
}

/// Diffs `table` against `reference`.
pub fn compute_mode_delta(table: &ModeTable, reference: &ReferenceTable) -> ModeDelta {
    let mut deltas = Vec::new();
    let mut unknown_theme_keys = Vec::new();
    for entry in table.iter() {
        let Some(reference_value) = reference.get(&entry.key) else {
            unknown_theme_keys.push(UnknownThemeKey {
                key: entry.key.clone(),
                value: entry.normalized_value.clone(),
                provenance: entry.provenance.clone(),
            });
            continue;
        };
        let reference_value = reference_value.to_string();
        if !same_value(&entry.key, &entry.normalized_value, &reference_value) {
            deltas.push(DeltaRecord {
                key: entry.key.clone(),
                provenance: entry.provenance.clone(),
                computed_value: entry.normalized_value.clone(),
                reference_value,
            });
        }
    }
    deltas.sort_by(|a, b| a.key.cmp(&b.key));
    unknown_theme_keys.sort_by(|a, b| a.key.cmp(&b.key));
    ModeDelta {
        mapped_token_count: table.len(),
        theme_token_count: reference.len(),
        delta_count: deltas.len(),
        deltas,
        unknown_theme_keys,
    }
}

/// A brand ramp step whose design value differs from the reference ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDelta {
    /// Brand token path, such as `Brand-80`.
    pub token: String,
    /// Resolved design value.
    pub design_value: String,
    /// Reference ramp value.
    pub reference_value: String,
}

/// Compares one ramp step; `None` when either side is absent or they agree.
pub fn compare_brand_step(
    token: &str,
    design_value: Option<&str>,
    reference_value: Option<&str>,
) -> Option<BrandDelta> {
    let design = canonical_text(design_value.unwrap_or_default());
    let reference = canonical_text(reference_value.unwrap_or_default());
    if design.is_empty() || reference.is_empty() || design == reference {
        return None;
    }
    Some(BrandDelta {
        token: token.to_string(),
        design_value: design_value.unwrap_or_default().to_string(),
        reference_value: reference_value.unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_steps_compare_as_text() {
        assert!(compare_brand_step("Brand-80", Some("#0F6CBD"), Some("#0f6cbd")).is_none());
        assert!(compare_brand_step("Brand-80", None, Some("#0f6cbd")).is_none());
        assert!(compare_brand_step("Brand-80", Some("#0F6CBD"), None).is_none());
        let delta = compare_brand_step("Brand-80", Some("#112233"), Some("#0f6cbd")).expect("delta");
        assert_eq!(delta.design_value, "#112233");
        assert_eq!(delta.reference_value, "#0f6cbd");
    }
}
