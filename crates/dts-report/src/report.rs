//! The persisted analysis report.

use std::collections::BTreeMap;

use dts_core::{Mode, PerMode, RunProvenance, SchemaVersion, ThemePackage, TokenValue};
use dts_graph::{DuplicateTokenPath, ResolutionDiagnostic};
use dts_map::UnmappedReason;
use serde::{Deserialize, Serialize};

use crate::aggregate::ConflictRecord;
use crate::delta::{BrandDelta, ModeDelta};

/// A mode path the mapper could not translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmappedRecord {
    /// Mode named by the first path segment.
    pub mode: Mode,
    /// Full token path, mode segment included.
    #[serde(rename = "tokenPath")]
    pub path: String,
    /// Document the token came from.
    pub source_document: String,
    /// Value as written.
    pub raw_value: TokenValue,
    /// Value after reference resolution, absent when resolution failed.
    pub resolved_value: Option<TokenValue>,
    /// Why the mapper gave up.
    pub reason: UnmappedReason,
}

impl UnmappedRecord {
    /// Resolved value, falling back to the raw value.
    pub fn effective_value(&self) -> &TokenValue {
        self.resolved_value.as_ref().unwrap_or(&self.raw_value)
    }
}

/// Headline counts of a report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Keys in the light table.
    pub light_mapped_tokens: usize,
    /// Keys in the dark table.
    pub dark_mapped_tokens: usize,
    /// Light deltas.
    pub light_deltas: usize,
    /// Dark deltas.
    pub dark_deltas: usize,
    /// Unmapped mode paths across both modes.
    pub unmapped_mode_paths: usize,
    /// Missing and circular reference diagnostics.
    pub unresolved_references: usize,
    /// Mapping conflicts across both modes.
    pub mapping_conflicts: usize,
    /// Duplicate token paths.
    pub duplicate_token_paths: usize,
    /// Brand ramp deltas.
    pub brand_deltas: usize,
}

/// Delta blocks of a report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDeltas {
    /// Light theme deltas.
    pub light: ModeDelta,
    /// Dark theme deltas.
    pub dark: ModeDelta,
    /// Brand ramp deltas.
    pub brand: Vec<BrandDelta>,
}

impl ReportDeltas {
    /// Delta block for `mode`.
    pub fn mode(&self, mode: Mode) -> &ModeDelta {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Output of one analysis pass. Every list is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// Report schema version.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Package the reference theme came from.
    #[serde(default)]
    pub reference_package: ThemePackage,
    /// Input hash and tool versions.
    pub provenance: RunProvenance,
    /// Headline counts.
    pub summary: ReportSummary,
    /// Per-mode and brand deltas.
    pub deltas: ReportDeltas,
    /// Computed key to value table per mode.
    pub mapped_themes: PerMode<BTreeMap<String, String>>,
    /// Mode paths without a canonical key.
    pub unmapped_mode_paths: Vec<UnmappedRecord>,
    /// Missing and circular references.
    pub unresolved_references: Vec<ResolutionDiagnostic>,
    /// Conflicting writes.
    pub mapping_conflicts: Vec<ConflictRecord>,
    /// Paths defined more than once.
    pub duplicate_token_paths: Vec<DuplicateTokenPath>,
}

impl SyncReport {
    /// Unmapped records of one mode.
    pub fn unmapped_for(&self, mode: Mode) -> impl Iterator<Item = &UnmappedRecord> {
        self.unmapped_mode_paths
            .iter()
            .filter(move |record| record.mode == mode)
    }
}
