#![deny(missing_docs)]
#![doc = "Verification gate for generated theme override artifacts."]

/// Allowlist of tolerated duplicates and unmapped paths.
pub mod allowlist;
pub mod gate;

pub use allowlist::Allowlist;
pub use gate::{verify, Verdict};
