//! Per-mode key tables with first-writer-wins conflict detection.

use std::collections::BTreeMap;

use dts_core::Mode;
use dts_value::same_value;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A normalized value placed under a canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedEntry {
    /// Canonical theme key.
    pub key: String,
    /// Mode the entry belongs to.
    pub mode: Mode,
    /// Output-ready value.
    pub normalized_value: String,
    /// Token path the value was derived from.
    pub provenance: String,
}

/// Two sources wrote canonically different values to one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    /// Mode of the conflicting writes.
    pub mode: Mode,
    /// Contested key.
    pub key: String,
    /// Value retained in the table.
    pub kept_value: String,
    /// Source of the retained value.
    pub kept_provenance: String,
    /// Rejected value.
    pub incoming_value: String,
    /// Source of the rejected value.
    pub incoming_provenance: String,
}

/// One entry per key for a single mode, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeTable {
    entries: BTreeMap<String, MappedEntry>,
}

impl ModeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` unless its key is taken. A later write with a
    /// canonically different value is returned as a conflict and the kept
    /// entry is left untouched.
    pub fn insert(&mut self, entry: MappedEntry) -> Option<ConflictRecord> {
        let Some(kept) = self.entries.get(&entry.key) else {
            self.entries.insert(entry.key.clone(), entry);
            return None;
        };
        if same_value(&entry.key, &kept.normalized_value, &entry.normalized_value) {
            return None;
        }
        warn!(
            mode = %entry.mode,
            key = %entry.key,
            kept = %kept.provenance,
            incoming = %entry.provenance,
            "mapping conflict"
        );
        Some(ConflictRecord {
            mode: entry.mode,
            key: entry.key,
            kept_value: kept.normalized_value.clone(),
            kept_provenance: kept.provenance.clone(),
            incoming_value: entry.normalized_value,
            incoming_provenance: entry.provenance,
        })
    }

    /// Entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&MappedEntry> {
        self.entries.get(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &MappedEntry> {
        self.entries.values()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no key has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key to normalized value view, as written to artifacts.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.normalized_value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str, provenance: &str) -> MappedEntry {
        MappedEntry {
            key: key.to_string(),
            mode: Mode::Light,
            normalized_value: value.to_string(),
            provenance: provenance.to_string(),
        }
    }

    #[test]
    fn canonically_equal_rewrites_are_ignored() {
        let mut table = ModeTable::new();
        assert!(table.insert(entry("colorBrandBackground", "#0000FF", "a")).is_none());
        assert!(table.insert(entry("colorBrandBackground", "rgb(0, 0, 255)", "b")).is_none());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("colorBrandBackground").map(|e| e.provenance.as_str()), Some("a"));
    }

    #[test]
    fn different_values_conflict_and_first_is_kept() {
        let mut table = ModeTable::new();
        table.insert(entry("colorBrandBackground", "#0000FF", "light.Brand.Background.1"));
        let conflict = table
            .insert(entry("colorBrandBackground", "#00FF00", "light.Other.Path"))
            .expect("conflict");
        assert_eq!(conflict.kept_value, "#0000FF");
        assert_eq!(conflict.incoming_provenance, "light.Other.Path");
        assert_eq!(table.values()["colorBrandBackground"], "#0000FF");
    }
}
