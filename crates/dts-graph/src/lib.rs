#![deny(missing_docs)]
#![doc = "Token graph construction and cycle-safe reference resolution."]

/// Validated token documents.
pub mod document;
/// First-wins flattening of documents into a path index.
pub mod graph;
/// Memoized reference resolution with missing/cycle diagnostics.
pub mod resolve;

pub use document::TokenDocument;
pub use graph::{DuplicateTokenPath, TokenGraph, TokenRecord};
pub use resolve::{ResolutionDiagnostic, Resolver};
