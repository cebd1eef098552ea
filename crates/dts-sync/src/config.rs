//! YAML configuration of a sync run.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dts_core::{ErrorInfo, SyncError};
use dts_map::DEFAULT_CUSTOM_PREFIX;
use dts_report::PassOptions;
use serde::{Deserialize, Serialize};

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "token-sync.yaml";

fn config_error(code: &str, path: &Path, err: impl ToString) -> SyncError {
    SyncError::Config(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Paths and knobs of a sync run. Every field has a default, so an empty
/// file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Token documents in graph insertion order; the file stem is the document id.
    #[serde(default = "SyncConfig::default_documents")]
    pub documents: Vec<PathBuf>,
    /// Id of the document holding `light`/`dark` subtrees.
    #[serde(default = "SyncConfig::default_mode_document")]
    pub mode_document: String,
    /// Reference theme document.
    #[serde(default = "SyncConfig::default_reference")]
    pub reference: PathBuf,
    /// Analysis report written by `analyze`.
    #[serde(default = "SyncConfig::default_report")]
    pub report: PathBuf,
    /// Override artifact written by `generate`.
    #[serde(default = "SyncConfig::default_overrides")]
    pub overrides: PathBuf,
    /// Update plan written by `generate`.
    #[serde(default = "SyncConfig::default_update_plan")]
    pub update_plan: PathBuf,
    /// Allowlist read by `verify`.
    #[serde(default = "SyncConfig::default_allowlist")]
    pub allowlist: PathBuf,
    /// Prefix of custom keys for unmapped paths.
    #[serde(default = "SyncConfig::default_custom_key_prefix")]
    pub custom_key_prefix: String,
    /// Path prefix of brand ramp tokens.
    #[serde(default = "SyncConfig::default_brand_prefix")]
    pub brand_prefix: String,
    /// Brand ramp steps compared against the reference.
    #[serde(default = "SyncConfig::default_brand_steps")]
    pub brand_steps: Vec<u32>,
    /// Key family name to edit-target label.
    #[serde(default)]
    pub update_targets: BTreeMap<String, String>,
    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub root: PathBuf,
}

impl SyncConfig {
    fn default_documents() -> Vec<PathBuf> {
        ["brand", "global", "layout", "mode"]
            .iter()
            .map(|name| PathBuf::from(format!("tokens/{name}.json")))
            .collect()
    }

    fn default_mode_document() -> String {
        "mode".to_string()
    }

    fn default_reference() -> PathBuf {
        PathBuf::from("reference/theme.json")
    }

    fn default_report() -> PathBuf {
        PathBuf::from("analysis/delta-report.json")
    }

    fn default_overrides() -> PathBuf {
        PathBuf::from("generated/theme-overrides.json")
    }

    fn default_update_plan() -> PathBuf {
        PathBuf::from("analysis/update-plan.json")
    }

    fn default_allowlist() -> PathBuf {
        PathBuf::from("config/sync-allowlist.json")
    }

    fn default_custom_key_prefix() -> String {
        DEFAULT_CUSTOM_PREFIX.to_string()
    }

    fn default_brand_prefix() -> String {
        PassOptions::default().brand_prefix
    }

    fn default_brand_steps() -> Vec<u32> {
        PassOptions::default().brand_steps
    }

    /// Resolves `path` against the configured root unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Options of the analysis pass.
    pub fn pass_options(&self) -> PassOptions {
        PassOptions {
            mode_document: self.mode_document.clone(),
            brand_prefix: self.brand_prefix.clone(),
            brand_steps: self.brand_steps.clone(),
        }
    }

    /// Sets the directory relative paths resolve against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            documents: Self::default_documents(),
            mode_document: Self::default_mode_document(),
            reference: Self::default_reference(),
            report: Self::default_report(),
            overrides: Self::default_overrides(),
            update_plan: Self::default_update_plan(),
            allowlist: Self::default_allowlist(),
            custom_key_prefix: Self::default_custom_key_prefix(),
            brand_prefix: Self::default_brand_prefix(),
            brand_steps: Self::default_brand_steps(),
            update_targets: BTreeMap::new(),
            root: PathBuf::new(),
        }
    }
}

/// Loads the configuration at `path` (relative to `root`); an absent file
/// yields the defaults.
pub fn load_config(path: &Path, root: &Path) -> Result<SyncConfig, SyncError> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SyncConfig::default().with_root(root));
    }
    let bytes = fs::read(&path).map_err(|err| config_error("config_read", &path, err))?;
    let config: SyncConfig = if bytes.iter().all(u8::is_ascii_whitespace) {
        SyncConfig::default()
    } else {
        serde_yaml::from_slice(&bytes).map_err(|err| config_error("config_parse", &path, err))?
    };
    Ok(config.with_root(root))
}
