use dts_core::SyncError;
use dts_report::{OverrideArtifact, SyncReport};
use dts_verify::{verify, Allowlist, Verdict};

use crate::config::SyncConfig;
use crate::io::{load_json, require_input, require_inputs};

/// Checks the persisted override artifact against the report and allowlist.
pub fn run(config: &SyncConfig) -> Result<Verdict, SyncError> {
    let report_path = config.resolve(&config.report);
    let allowlist_path = config.resolve(&config.allowlist);
    let overrides_path = config.resolve(&config.overrides);
    require_inputs([&report_path, &allowlist_path])?;
    require_input(&overrides_path, "run `dts-sync generate` first")?;

    let report: SyncReport = load_json(&report_path)?;
    let allowlist: Allowlist = load_json(&allowlist_path)?;
    let overrides: OverrideArtifact = load_json(&overrides_path)?;
    Ok(verify(&report, &overrides, &allowlist, &config.custom_key_prefix))
}
