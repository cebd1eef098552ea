//! Update plan: deltas grouped by the place they have to be fixed.

use std::collections::BTreeMap;

use dts_core::{Mode, SchemaVersion, SyncError, ThemePackage};
use dts_graph::ResolutionDiagnostic;
use dts_value::KeyFamily;
use serde::{Deserialize, Serialize};

use crate::aggregate::ConflictRecord;
use crate::delta::{BrandDelta, DeltaRecord};
use crate::hash::stable_hash_string;
use crate::report::{ReportSummary, SyncReport, UnmappedRecord};

/// Target label used for brand ramp deltas unless configured.
pub const BRAND_TARGET: &str = "brand";

/// Deltas sharing one edit target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroup<T> {
    /// Edit target label.
    pub target: String,
    /// Length of `deltas`.
    pub delta_count: usize,
    /// Deltas to apply at the target.
    pub deltas: Vec<T>,
}

impl<T> TargetGroup<T> {
    fn new(target: String, deltas: Vec<T>) -> Self {
        Self {
            target,
            delta_count: deltas.len(),
            deltas,
        }
    }
}

/// Grouped deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTargets {
    /// Brand ramp deltas.
    pub brand: TargetGroup<BrandDelta>,
    /// Light deltas grouped by target, sorted by target.
    pub light: Vec<TargetGroup<DeltaRecord>>,
    /// Dark deltas grouped by target, sorted by target.
    pub dark: Vec<TargetGroup<DeltaRecord>>,
}

/// Remediation plan derived from a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlan {
    /// Plan schema version.
    pub schema_version: SchemaVersion,
    /// Hash of the source report.
    pub source_report_hash: String,
    /// Package the reference theme came from.
    pub reference_package: ThemePackage,
    /// Report counts.
    pub summary: ReportSummary,
    /// Grouped deltas.
    pub update_targets: UpdateTargets,
    /// Carried from the report.
    pub unmapped_mode_paths: Vec<UnmappedRecord>,
    /// Carried from the report.
    pub unresolved_references: Vec<ResolutionDiagnostic>,
    /// Carried from the report.
    pub mapping_conflicts: Vec<ConflictRecord>,
}

/// Edit target of `key` in `mode`. `labels` maps a key family name to a
/// label; color targets are split per mode.
pub fn edit_target(labels: &BTreeMap<String, String>, mode: Mode, key: &str) -> String {
    let family = KeyFamily::of(key);
    let label = labels
        .get(family.as_str())
        .cloned()
        .unwrap_or_else(|| family.as_str().to_string());
    match family {
        KeyFamily::Color => format!("{label}.{mode}"),
        _ => label,
    }
}

fn group_by_target(
    labels: &BTreeMap<String, String>,
    mode: Mode,
    deltas: &[DeltaRecord],
) -> Vec<TargetGroup<DeltaRecord>> {
    let mut grouped: BTreeMap<String, Vec<DeltaRecord>> = BTreeMap::new();
    for delta in deltas {
        grouped
            .entry(edit_target(labels, mode, &delta.key))
            .or_default()
            .push(delta.clone());
    }
    grouped
        .into_iter()
        .map(|(target, deltas)| TargetGroup::new(target, deltas))
        .collect()
}

/// Builds the update plan for `report`.
pub fn build_update_plan(
    report: &SyncReport,
    labels: &BTreeMap<String, String>,
) -> Result<UpdatePlan, SyncError> {
    let brand_target = labels
        .get(BRAND_TARGET)
        .cloned()
        .unwrap_or_else(|| BRAND_TARGET.to_string());
    Ok(UpdatePlan {
        schema_version: SchemaVersion::default(),
        source_report_hash: stable_hash_string(report)?,
        reference_package: report.reference_package.clone(),
        summary: report.summary.clone(),
        update_targets: UpdateTargets {
            brand: TargetGroup::new(brand_target, report.deltas.brand.clone()),
            light: group_by_target(labels, Mode::Light, &report.deltas.light.deltas),
            dark: group_by_target(labels, Mode::Dark, &report.deltas.dark.deltas),
        },
        unmapped_mode_paths: report.unmapped_mode_paths.clone(),
        unresolved_references: report.unresolved_references.clone(),
        mapping_conflicts: report.mapping_conflicts.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_split_per_mode_and_labels_apply() {
        let mut labels = BTreeMap::new();
        labels.insert("spacing".to_string(), "global/spacings".to_string());
        assert_eq!(edit_target(&labels, Mode::Dark, "colorBrandBackground"), "color.dark");
        assert_eq!(edit_target(&labels, Mode::Light, "spacingHorizontalM"), "global/spacings");
        assert_eq!(edit_target(&labels, Mode::Light, "fontWeightBold"), "fontWeight");
    }
}
