//! Loading layer: the only place that touches the filesystem.
//!
//! Absent inputs are reported as [`SyncError::Input`] before any
//! computation starts.

use std::fs;
use std::path::{Path, PathBuf};

use dts_core::{ErrorInfo, SyncError};
use dts_graph::TokenDocument;
use dts_report::{from_json_slice, to_canonical_json_pretty};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn io_error(code: &str, path: &Path, err: impl ToString) -> SyncError {
    SyncError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Fails with a missing-input error for the first absent path.
pub fn require_inputs<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Result<(), SyncError> {
    for path in paths {
        if !path.exists() {
            return Err(SyncError::missing_input(path.display().to_string()));
        }
    }
    Ok(())
}

/// Like [`require_inputs`] for one path, attaching `hint` to the error.
pub fn require_input(path: &Path, hint: &str) -> Result<(), SyncError> {
    if path.exists() {
        return Ok(());
    }
    Err(SyncError::missing_input(path.display().to_string()).with_hint(hint))
}

/// Document id of a token file: its stem.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reads and validates one token document.
pub fn load_document(path: &Path) -> Result<TokenDocument, SyncError> {
    let bytes = fs::read(path).map_err(|err| io_error("document_read", path, err))?;
    TokenDocument::from_json_slice(document_id(path), &bytes)
}

/// Reads a JSON artifact.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, SyncError> {
    let bytes = fs::read(path).map_err(|err| io_error("artifact_read", path, err))?;
    from_json_slice(&bytes).map_err(|err| match err {
        SyncError::Serde(info) => {
            SyncError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

/// Writes `value` as canonical pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| io_error("artifact_dir", parent, err))?;
    }
    let text = to_canonical_json_pretty(value)?;
    fs::write(path, text).map_err(|err| io_error("artifact_write", path, err))
}
