//! The authoritative theme the computed tables are compared against.

use std::collections::BTreeMap;

use dts_core::{Mode, PerMode, ThemePackage, TokenValue};
use serde::{Deserialize, Serialize};

/// Flat key to value table of one reference theme.
pub type ReferenceTable = BTreeMap<String, TokenValue>;

/// Reference document: the external theming library's resolved themes and
/// brand ramp.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceTheme {
    /// Package the themes were taken from.
    #[serde(default)]
    pub package: ThemePackage,
    /// Resolved theme per mode.
    #[serde(default)]
    pub themes: PerMode<ReferenceTable>,
    /// Brand ramp keyed by step number.
    #[serde(default)]
    pub brand: BTreeMap<String, TokenValue>,
}

impl ReferenceTheme {
    /// Reference table for `mode`.
    pub fn theme(&self, mode: Mode) -> &ReferenceTable {
        self.themes.get(mode)
    }

    /// Reference brand value for a ramp step.
    pub fn brand_step(&self, step: u32) -> Option<&TokenValue> {
        self.brand.get(&step.to_string())
    }
}
