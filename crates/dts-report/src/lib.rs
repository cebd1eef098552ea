#![deny(missing_docs)]
#![doc = "Aggregation, delta computation and artifact assembly for token sync runs."]

pub mod aggregate;
pub mod delta;
mod hash;
pub mod overrides;
pub mod pass;
pub mod plan;
pub mod reference;
pub mod report;
mod serde;

pub use aggregate::{ConflictRecord, MappedEntry, ModeTable};
pub use delta::{
    compare_brand_step, compute_mode_delta, BrandDelta, DeltaRecord, ModeDelta, UnknownThemeKey,
};
pub use hash::stable_hash_string;
pub use overrides::{build_overrides, CustomOverride, OverrideArtifact};
pub use pass::{run_pass, PassOptions, TOOL_NAME};
pub use plan::{build_update_plan, edit_target, TargetGroup, UpdatePlan, UpdateTargets};
pub use reference::{ReferenceTable, ReferenceTheme};
pub use report::{ReportDeltas, ReportSummary, SyncReport, UnmappedRecord};
pub use crate::serde::{from_json_slice, to_canonical_json_bytes, to_canonical_json_pretty};
