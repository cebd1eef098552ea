//! One full analysis pass over a set of token documents.

use dts_core::{Mode, PerMode, RunProvenance, SchemaVersion, SyncError, TokenValue};
use dts_graph::{Resolver, TokenDocument, TokenGraph};
use dts_map::{map_mode_path, static_mappings, MappingOutcome};
use dts_value::normalize;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::aggregate::{ConflictRecord, MappedEntry, ModeTable};
use crate::delta::{compare_brand_step, compute_mode_delta, BrandDelta};
use crate::hash::stable_hash_string;
use crate::reference::ReferenceTheme;
use crate::report::{ReportDeltas, ReportSummary, SyncReport, UnmappedRecord};

/// Name recorded in report provenance.
pub const TOOL_NAME: &str = "dts-report";

/// Knobs of an analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOptions {
    /// Identifier of the document holding `light`/`dark` subtrees.
    pub mode_document: String,
    /// Path prefix of brand ramp tokens.
    pub brand_prefix: String,
    /// Brand ramp steps compared against the reference.
    pub brand_steps: Vec<u32>,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            mode_document: "mode".to_string(),
            brand_prefix: "Brand-".to_string(),
            brand_steps: (10..=160).step_by(10).collect(),
        }
    }
}

#[derive(Serialize)]
struct PassInputs<'a> {
    documents: Vec<DocumentInput<'a>>,
    reference: &'a ReferenceTheme,
}

#[derive(Serialize)]
struct DocumentInput<'a> {
    id: &'a str,
    root: &'a Map<String, Value>,
}

struct Tables {
    modes: PerMode<ModeTable>,
    conflicts: Vec<ConflictRecord>,
}

impl Tables {
    fn add(&mut self, mode: Mode, key: &str, value: &TokenValue, provenance: &str) {
        let entry = MappedEntry {
            key: key.to_string(),
            mode,
            normalized_value: normalize(key, value),
            provenance: provenance.to_string(),
        };
        if let Some(conflict) = self.modes.get_mut(mode).insert(entry) {
            self.conflicts.push(conflict);
        }
    }
}

/// Runs build, resolve, map, normalize, aggregate and delta over the
/// documents. The result depends only on the inputs.
pub fn run_pass(
    documents: &[TokenDocument],
    reference: &ReferenceTheme,
    options: &PassOptions,
) -> Result<SyncReport, SyncError> {
    let input_hash = stable_hash_string(&PassInputs {
        documents: documents
            .iter()
            .map(|document| DocumentInput {
                id: document.id(),
                root: document.root(),
            })
            .collect(),
        reference,
    })?;

    let graph = TokenGraph::build(documents);
    let mut resolver = Resolver::new(&graph);
    let mut tables = Tables {
        modes: PerMode::from_fn(|_| ModeTable::new()),
        conflicts: Vec::new(),
    };

    for mapping in static_mappings() {
        let Some(value) = resolver.resolve(&mapping.path) else {
            continue;
        };
        let provenance = graph
            .get(&mapping.path)
            .map(|record| format!("{}.{}", record.source_document, record.path))
            .unwrap_or_else(|| mapping.path.clone());
        for mode in Mode::ALL {
            tables.add(mode, &mapping.key, &value, &provenance);
        }
    }

    let mut unmapped = Vec::new();
    for record in graph
        .iter()
        .filter(|record| record.source_document == options.mode_document)
    {
        let Some((mode, outcome)) = map_mode_path(&record.path) else {
            continue;
        };
        let resolved = resolver.resolve(&record.path);
        match outcome {
            MappingOutcome::Mapped(key) => {
                if let Some(value) = resolved {
                    tables.add(mode, &key, &value, &record.path);
                }
            }
            MappingOutcome::Unmapped(reason) => unmapped.push(UnmappedRecord {
                mode,
                path: record.path.clone(),
                source_document: record.source_document.clone(),
                raw_value: record.raw_value.clone(),
                resolved_value: resolved,
                reason,
            }),
        }
    }

    let brand = brand_deltas(&mut resolver, reference, options);

    let mut unresolved = resolver.into_diagnostics();
    unresolved.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    unresolved.dedup();
    unmapped.sort_by(|a, b| a.path.cmp(&b.path).then(a.mode.cmp(&b.mode)));
    let Tables { modes, mut conflicts } = tables;
    conflicts.sort_by(|a, b| (a.mode, &a.key).cmp(&(b.mode, &b.key)));
    let mut duplicates = graph.duplicates().to_vec();
    duplicates.sort();

    let deltas = ReportDeltas {
        light: compute_mode_delta(&modes.light, reference.theme(Mode::Light)),
        dark: compute_mode_delta(&modes.dark, reference.theme(Mode::Dark)),
        brand,
    };
    let summary = ReportSummary {
        light_mapped_tokens: modes.light.len(),
        dark_mapped_tokens: modes.dark.len(),
        light_deltas: deltas.light.delta_count,
        dark_deltas: deltas.dark.delta_count,
        unmapped_mode_paths: unmapped.len(),
        unresolved_references: unresolved.len(),
        mapping_conflicts: conflicts.len(),
        duplicate_token_paths: duplicates.len(),
        brand_deltas: deltas.brand.len(),
    };
    info!(
        light = summary.light_mapped_tokens,
        dark = summary.dark_mapped_tokens,
        light_deltas = summary.light_deltas,
        dark_deltas = summary.dark_deltas,
        unmapped = summary.unmapped_mode_paths,
        unresolved = summary.unresolved_references,
        conflicts = summary.mapping_conflicts,
        duplicates = summary.duplicate_token_paths,
        brand_deltas = summary.brand_deltas,
        "analysis pass complete"
    );

    Ok(SyncReport {
        schema_version: SchemaVersion::default(),
        reference_package: reference.package.clone(),
        provenance: RunProvenance::new(input_hash, TOOL_NAME, env!("CARGO_PKG_VERSION")),
        summary,
        deltas,
        mapped_themes: modes.map(|_, table| table.values()),
        unmapped_mode_paths: unmapped,
        unresolved_references: unresolved,
        mapping_conflicts: conflicts,
        duplicate_token_paths: duplicates,
    })
}

fn brand_deltas(
    resolver: &mut Resolver<'_>,
    reference: &ReferenceTheme,
    options: &PassOptions,
) -> Vec<BrandDelta> {
    let mut deltas = Vec::new();
    for &step in &options.brand_steps {
        let token = format!("{}{step}", options.brand_prefix);
        // Configured steps may exceed the palette; unlike static sources an
        // absent step is skipped, not reported as a missing reference.
        if !resolver.graph().contains(&token) {
            continue;
        }
        let design = resolver.resolve(&token).map(|value| value.to_string());
        let expected = reference.brand_step(step).map(|value| value.to_string());
        if let Some(delta) = compare_brand_step(&token, design.as_deref(), expected.as_deref()) {
            deltas.push(delta);
        }
    }
    deltas
}
