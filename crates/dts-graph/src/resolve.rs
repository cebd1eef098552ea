use std::collections::HashMap;
use std::fmt::{self, Display};

use dts_core::TokenValue;
use serde::{Deserialize, Serialize};

use crate::graph::TokenGraph;

/// Failure recorded while following a reference chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResolutionDiagnostic {
    /// The chain points at a path that has no leaf.
    #[serde(rename = "missing")]
    MissingReference {
        /// Path that could not be found.
        #[serde(rename = "tokenPath")]
        path: String,
        /// Paths visited before reaching the missing one.
        stack: Vec<String>,
    },
    /// The chain revisits a path already on the stack.
    #[serde(rename = "circular")]
    CircularReference {
        /// Path that closed the cycle.
        #[serde(rename = "tokenPath")]
        path: String,
        /// Paths forming the cycle, starting with `path`.
        stack: Vec<String>,
    },
}

impl ResolutionDiagnostic {
    /// Path the diagnostic is about.
    pub fn path(&self) -> &str {
        match self {
            ResolutionDiagnostic::MissingReference { path, .. }
            | ResolutionDiagnostic::CircularReference { path, .. } => path,
        }
    }

    /// Reference stack at the time of failure.
    pub fn stack(&self) -> &[String] {
        match self {
            ResolutionDiagnostic::MissingReference { stack, .. }
            | ResolutionDiagnostic::CircularReference { stack, .. } => stack,
        }
    }

    /// Short label of the failure family.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionDiagnostic::MissingReference { .. } => "missing",
            ResolutionDiagnostic::CircularReference { .. } => "circular",
        }
    }

    /// Ordering key used when diagnostics are sorted for a report.
    pub fn sort_key(&self) -> (&str, &'static str, &[String]) {
        (self.path(), self.kind(), self.stack())
    }
}

impl Display for ResolutionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} reference {}", self.kind(), self.path())?;
        if !self.stack().is_empty() {
            write!(f, " (via {})", self.stack().join(" -> "))?;
        }
        Ok(())
    }
}

/// Resolution context for one pass over a [`TokenGraph`].
///
/// Owns its memo table and diagnostics, so independent passes never share
/// state. Every path is resolved at most once; later lookups hit the memo
/// whether the first outcome was a value or absent.
#[derive(Debug)]
pub struct Resolver<'g> {
    graph: &'g TokenGraph,
    cache: HashMap<String, Option<TokenValue>>,
    diagnostics: Vec<ResolutionDiagnostic>,
}

impl<'g> Resolver<'g> {
    /// Creates a fresh context over `graph`.
    pub fn new(graph: &'g TokenGraph) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Graph this context resolves against.
    pub fn graph(&self) -> &'g TokenGraph {
        self.graph
    }

    /// Follows references from `path` to a literal value.
    ///
    /// Returns `None` when the chain hits a missing path or a cycle; the
    /// cause is recorded in [`Resolver::diagnostics`]. Never panics and
    /// always terminates.
    pub fn resolve(&mut self, path: &str) -> Option<TokenValue> {
        let mut stack = Vec::new();
        self.resolve_with(path, &mut stack)
    }

    fn resolve_with(&mut self, path: &str, stack: &mut Vec<String>) -> Option<TokenValue> {
        if let Some(cached) = self.cache.get(path) {
            return cached.clone();
        }

        if stack.iter().any(|visited| visited == path) {
            tracing::debug!(path, stack = ?stack, "circular token reference");
            self.diagnostics.push(ResolutionDiagnostic::CircularReference {
                path: path.to_string(),
                stack: stack.clone(),
            });
            return None;
        }

        let graph = self.graph;
        let Some(record) = graph.get(path) else {
            tracing::debug!(path, stack = ?stack, "missing token reference");
            self.diagnostics.push(ResolutionDiagnostic::MissingReference {
                path: path.to_string(),
                stack: stack.clone(),
            });
            return None;
        };

        let resolved = match record.raw_value.reference() {
            Some(target) => {
                stack.push(path.to_string());
                let resolved = self.resolve_with(target, stack);
                stack.pop();
                resolved
            }
            None => Some(record.raw_value.clone()),
        };

        self.cache.insert(path.to_string(), resolved.clone());
        resolved
    }

    /// Diagnostics recorded so far, in encounter order.
    pub fn diagnostics(&self) -> &[ResolutionDiagnostic] {
        &self.diagnostics
    }

    /// Consumes the context and returns its diagnostics.
    pub fn into_diagnostics(self) -> Vec<ResolutionDiagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TokenRecord;

    fn graph(entries: &[(&str, TokenValue)]) -> TokenGraph {
        let mut graph = TokenGraph::new();
        for (path, value) in entries {
            graph.insert(TokenRecord {
                path: (*path).to_string(),
                source_document: "test".into(),
                raw_value: value.clone(),
                kind: "color".into(),
            });
        }
        graph
    }

    #[test]
    fn literal_values_resolve_to_themselves() {
        let graph = graph(&[("a", TokenValue::text("#fff"))]);
        let mut resolver = Resolver::new(&graph);
        assert_eq!(resolver.resolve("a"), Some(TokenValue::text("#fff")));
        assert!(resolver.diagnostics().is_empty());
    }

    #[test]
    fn chains_are_followed_transitively() {
        let graph = graph(&[
            ("a", TokenValue::text("{b}")),
            ("b", TokenValue::text("{c}")),
            ("c", TokenValue::int(12)),
        ]);
        let mut resolver = Resolver::new(&graph);
        assert_eq!(resolver.resolve("a"), Some(TokenValue::int(12)));
        assert_eq!(resolver.resolve("b"), Some(TokenValue::int(12)));
        assert!(resolver.diagnostics().is_empty());
    }

    #[test]
    fn memoized_failures_are_reported_once() {
        let graph = graph(&[("a", TokenValue::text("{gone}"))]);
        let mut resolver = Resolver::new(&graph);
        assert_eq!(resolver.resolve("a"), None);
        assert_eq!(resolver.resolve("a"), None);
        assert_eq!(resolver.diagnostics().len(), 1);
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let graph = graph(&[("a", TokenValue::text("{a}"))]);
        let mut resolver = Resolver::new(&graph);
        assert_eq!(resolver.resolve("a"), None);
        assert_eq!(
            resolver.into_diagnostics(),
            vec![ResolutionDiagnostic::CircularReference {
                path: "a".into(),
                stack: vec!["a".into()],
            }]
        );
    }

    #[test]
    fn diagnostics_render_their_chain() {
        let diagnostic = ResolutionDiagnostic::MissingReference {
            path: "x".into(),
            stack: vec!["a".into(), "b".into()],
        };
        assert_eq!(diagnostic.to_string(), "missing reference x (via a -> b)");
    }
}
