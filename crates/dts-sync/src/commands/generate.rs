use dts_core::SyncError;
use dts_report::{build_overrides, build_update_plan, OverrideArtifact, SyncReport, UpdatePlan};
use tracing::info;

use crate::config::SyncConfig;
use crate::io::{load_json, require_input, write_json};

/// Builds the override artifact and the update plan from a persisted report.
pub fn run(config: &SyncConfig) -> Result<(OverrideArtifact, UpdatePlan), SyncError> {
    let report_path = config.resolve(&config.report);
    require_input(&report_path, "run `dts-sync analyze` first")?;
    let report: SyncReport = load_json(&report_path)?;

    let overrides = build_overrides(&report, &config.custom_key_prefix)?;
    let plan = build_update_plan(&report, &config.update_targets)?;

    let overrides_path = config.resolve(&config.overrides);
    write_json(&overrides_path, &overrides)?;
    info!(path = %overrides_path.display(), "wrote overrides");
    let plan_path = config.resolve(&config.update_plan);
    write_json(&plan_path, &plan)?;
    info!(path = %plan_path.display(), "wrote update plan");
    Ok((overrides, plan))
}
