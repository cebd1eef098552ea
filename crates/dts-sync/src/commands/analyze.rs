use dts_core::SyncError;
use dts_report::{run_pass, ReferenceTheme, SyncReport};
use tracing::info;

use crate::config::SyncConfig;
use crate::io::{load_document, load_json, require_inputs, write_json};

/// Loads every token document and the reference theme, runs the analysis
/// pass and writes the report.
pub fn run(config: &SyncConfig) -> Result<SyncReport, SyncError> {
    let documents: Vec<_> = config
        .documents
        .iter()
        .map(|path| config.resolve(path))
        .collect();
    let reference_path = config.resolve(&config.reference);
    require_inputs(documents.iter().chain(std::iter::once(&reference_path)))?;

    let documents = documents
        .iter()
        .map(|path| load_document(path))
        .collect::<Result<Vec<_>, _>>()?;
    let reference: ReferenceTheme = load_json(&reference_path)?;

    let report = run_pass(&documents, &reference, &config.pass_options())?;
    let report_path = config.resolve(&config.report);
    write_json(&report_path, &report)?;
    info!(path = %report_path.display(), "wrote report");
    Ok(report)
}
