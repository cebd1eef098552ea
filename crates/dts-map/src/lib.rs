#![deny(missing_docs)]
#![doc = "Translation of design-token paths into canonical theme keys."]

pub mod mapper;
pub mod naming;
pub mod rules;
pub mod state;
pub mod statics;

pub use mapper::{map_mode_path, map_segments, MappingOutcome, UnmappedReason};
pub use naming::{custom_token_key, to_pascal_case, DEFAULT_CUSTOM_PREFIX};
pub use state::State;
pub use statics::{static_mappings, StaticMapping};
