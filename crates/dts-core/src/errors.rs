//! Structured error types shared across the token sync crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SyncError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, token identifiers, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the token sync engine.
///
/// Only conditions that abort a run are errors. Everything the engine can
/// recover from (duplicates, unresolved references, conflicts, unmapped
/// paths) is recorded as report data instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SyncError {
    /// A required input document or artifact is absent.
    #[error("missing input: {0}")]
    Input(ErrorInfo),
    /// A token document does not have the expected tree shape.
    #[error("document error: {0}")]
    Document(ErrorInfo),
    /// Configuration could not be interpreted.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors raised by the loading layer.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SyncError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SyncError::Input(info)
            | SyncError::Document(info)
            | SyncError::Config(info)
            | SyncError::Serde(info)
            | SyncError::Io(info) => info,
        }
    }

    /// Builds the fatal error raised when a required input is absent.
    pub fn missing_input(path: impl Into<String>) -> Self {
        let path = path.into();
        SyncError::Input(
            ErrorInfo::new("missing_input", format!("required input not found: {path}"))
                .with_context("path", path),
        )
    }

    /// Attaches a remediation hint to the payload.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            SyncError::Input(info) => SyncError::Input(info.with_hint(hint)),
            SyncError::Document(info) => SyncError::Document(info.with_hint(hint)),
            SyncError::Config(info) => SyncError::Config(info.with_hint(hint)),
            SyncError::Serde(info) => SyncError::Serde(info.with_hint(hint)),
            SyncError::Io(info) => SyncError::Io(info.with_hint(hint)),
        }
    }

    /// Returns true for the fatal missing-input family.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, SyncError::Input(_))
    }
}
