use dts_core::TokenValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{TokenDocument, VALUE_FIELD};

/// Kind recorded for leaves that do not declare one.
pub const UNKNOWN_KIND: &str = "unknown";

/// Immutable leaf token addressed by its dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Dotted path from the document root to the leaf.
    pub path: String,
    /// Identifier of the document the leaf was read from.
    pub source_document: String,
    /// Literal value, possibly a reference.
    pub raw_value: TokenValue,
    /// Declared token kind (`kind` or `type` field), or `unknown`.
    pub kind: String,
}

/// A leaf that was dropped because its path was already taken.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateTokenPath {
    /// Path shared by both leaves.
    pub token_path: String,
    /// Document whose leaf was kept.
    pub kept_source_document: String,
    /// Document whose leaf was ignored.
    pub ignored_source_document: String,
}

/// Flat, insertion-ordered index of every leaf across a set of documents.
#[derive(Debug, Clone, Default)]
pub struct TokenGraph {
    records: IndexMap<String, TokenRecord>,
    duplicates: Vec<DuplicateTokenPath>,
}

impl TokenGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens the documents in order into a single graph.
    pub fn build<'a>(documents: impl IntoIterator<Item = &'a TokenDocument>) -> Self {
        let mut graph = Self::new();
        for document in documents {
            graph.add_document(document);
        }
        graph
    }

    /// Flattens one document into the graph.
    pub fn add_document(&mut self, document: &TokenDocument) {
        let mut path = Vec::new();
        self.flatten(document.id(), document.root(), &mut path);
    }

    fn flatten<'a>(&mut self, source: &str, node: &'a Map<String, Value>, path: &mut Vec<&'a str>) {
        if let Some(value) = node.get(VALUE_FIELD) {
            let Some(raw_value) = leaf_value(value) else {
                return;
            };
            let kind = node
                .get("kind")
                .or_else(|| node.get("type"))
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_KIND)
                .to_string();
            self.insert(TokenRecord {
                path: path.join("."),
                source_document: source.to_string(),
                raw_value,
                kind,
            });
            return;
        }
        for (key, child) in node {
            if let Value::Object(child) = child {
                path.push(key);
                self.flatten(source, child, path);
                path.pop();
            }
        }
    }

    /// Inserts a record unless its path already exists.
    ///
    /// Returns `false` and records a [`DuplicateTokenPath`] when the path is
    /// taken; the earlier record is never replaced.
    pub fn insert(&mut self, record: TokenRecord) -> bool {
        if let Some(kept) = self.records.get(&record.path) {
            tracing::debug!(
                path = %record.path,
                kept = %kept.source_document,
                ignored = %record.source_document,
                "duplicate token path ignored"
            );
            self.duplicates.push(DuplicateTokenPath {
                token_path: record.path,
                kept_source_document: kept.source_document.clone(),
                ignored_source_document: record.source_document,
            });
            return false;
        }
        self.records.insert(record.path.clone(), record);
        true
    }

    /// Looks up a leaf by path.
    pub fn get(&self, path: &str) -> Option<&TokenRecord> {
        self.records.get(path)
    }

    /// Returns true when a leaf exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.records.contains_key(path)
    }

    /// Iterates leaves in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenRecord> {
        self.records.values()
    }

    /// Number of distinct leaves.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the graph has no leaves.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Duplicate paths encountered while building, in encounter order.
    pub fn duplicates(&self) -> &[DuplicateTokenPath] {
        &self.duplicates
    }
}

fn leaf_value(value: &Value) -> Option<TokenValue> {
    match value {
        Value::String(text) => Some(TokenValue::Text(text.clone())),
        Value::Number(number) => Some(TokenValue::Number(number.clone())),
        Value::Bool(flag) => Some(TokenValue::Text(flag.to_string())),
        _ => None,
    }
}
