#![deny(missing_docs)]
#![doc = "Normalization (for output) and canonicalization (for comparison) of token values."]

pub mod canonical;
/// Key families derived from canonical key prefixes.
pub mod family;
pub mod normalize;
pub mod number;
mod weight;

pub use canonical::{canonical, canonical_color, canonical_for_key, canonical_text};
pub use family::KeyFamily;
pub use normalize::normalize;

/// Returns true when two values are the same for the family of `key`.
pub fn same_value(key: &str, left: &str, right: &str) -> bool {
    canonical_for_key(key, left) == canonical_for_key(key, right)
}
