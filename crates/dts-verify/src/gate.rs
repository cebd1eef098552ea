//! Cross-checks of a report, its override artifact and the allowlist.

use dts_core::Mode;
use dts_map::custom_token_key;
use dts_report::{OverrideArtifact, SyncReport, UnmappedRecord};
use dts_value::{canonical_text, same_value};
use tracing::{debug, info};

use crate::allowlist::Allowlist;

/// Outcome of the gate: every violation found, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verdict {
    failures: Vec<String>,
}

impl Verdict {
    fn fail(&mut self, message: String) {
        debug!(failure = %message, "verification failure");
        self.failures.push(message);
    }

    /// True when no check failed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure descriptions.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Consumes the verdict, returning its failures.
    pub fn into_failures(self) -> Vec<String> {
        self.failures
    }
}

/// Runs every check and collects all failures. `custom_prefix` must match
/// the prefix the artifact was generated with.
pub fn verify(
    report: &SyncReport,
    overrides: &OverrideArtifact,
    allowlist: &Allowlist,
    custom_prefix: &str,
) -> Verdict {
    let mut verdict = Verdict::default();

    for diagnostic in &report.unresolved_references {
        verdict.fail(format!("Unresolved token reference: {diagnostic}"));
    }
    for conflict in &report.mapping_conflicts {
        verdict.fail(format!(
            "{} mapping conflict for {}: kept \"{}\" from {}, rejected \"{}\" from {}",
            conflict.mode,
            conflict.key,
            conflict.kept_value,
            conflict.kept_provenance,
            conflict.incoming_value,
            conflict.incoming_provenance
        ));
    }
    for duplicate in &report.duplicate_token_paths {
        if !allowlist.allows_duplicate(&duplicate.token_path) {
            verdict.fail(format!("Unexpected duplicate token path: {}", duplicate.token_path));
        }
    }
    for unmapped in &report.unmapped_mode_paths {
        if !allowlist.allows_unmapped(&unmapped.path) {
            verdict.fail(format!("Unmapped token path not allowlisted: {}", unmapped.path));
        }
    }

    for mode in Mode::ALL {
        check_mapped_keys(&mut verdict, report, overrides, mode);
    }
    for mode in Mode::ALL {
        for unmapped in report.unmapped_for(mode) {
            if allowlist.allows_unmapped(&unmapped.path) {
                check_custom_key(&mut verdict, overrides, unmapped, custom_prefix);
            }
        }
    }

    info!(failures = verdict.failures.len(), "verification finished");
    verdict
}

fn check_mapped_keys(
    verdict: &mut Verdict,
    report: &SyncReport,
    overrides: &OverrideArtifact,
    mode: Mode,
) {
    let generated = overrides.modes.get(mode);
    for (key, expected) in report.mapped_themes.get(mode) {
        match generated.get(key) {
            None => verdict.fail(format!("{mode} override missing key: {key}")),
            Some(found) if !same_value(key, expected, found) => verdict.fail(format!(
                "{mode} override value mismatch for {key}: expected \"{expected}\", found \"{found}\""
            )),
            Some(_) => {}
        }
    }
}

fn check_custom_key(
    verdict: &mut Verdict,
    overrides: &OverrideArtifact,
    unmapped: &UnmappedRecord,
    custom_prefix: &str,
) {
    let mode = unmapped.mode;
    let path = &unmapped.path;
    let key = custom_token_key(custom_prefix, path);
    let expected = unmapped.effective_value().to_string();

    let ported = overrides
        .custom_modes
        .get(mode)
        .get(&key)
        .filter(|custom| &custom.token_path == path);
    let Some(ported) = ported else {
        verdict.fail(format!(
            "{mode} unmapped token path not ported to custom override: {path} (expected key {key})"
        ));
        return;
    };
    if canonical_text(&ported.value) != canonical_text(&expected) {
        verdict.fail(format!(
            "{mode} custom override mismatch for {path}: expected \"{expected}\", found \"{}\"",
            ported.value
        ));
    }

    let themed = overrides.modes.get(mode).get(&key);
    if themed.map(String::as_str).map(canonical_text) != Some(canonical_text(&expected)) {
        verdict.fail(format!(
            "{mode} custom key missing or wrong in modes.{mode}: {key} expected \"{expected}\""
        ));
    }
}
