#![deny(missing_docs)]
#![doc = "Core data types shared by the design-token sync engine."]

pub mod errors;
pub mod mode;
pub mod provenance;
pub mod value;

pub use errors::{ErrorInfo, SyncError};
pub use mode::{Mode, PerMode};
pub use provenance::{RunProvenance, SchemaVersion, ThemePackage};
pub use value::TokenValue;

/// Separator between segments of a dotted token path.
pub const PATH_SEPARATOR: char = '.';

/// Splits a dotted token path into its segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).collect()
}
