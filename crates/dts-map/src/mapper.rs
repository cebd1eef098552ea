//! Evaluation of mode paths against the rule table.

use std::fmt;

use dts_core::{split_path, Mode};
use serde::{Deserialize, Serialize};

use crate::naming::to_pascal_case;
use crate::rules::{family_for, is_known_group, RuleMatch};

/// Why a mode path produced no canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UnmappedReason {
    /// Fewer than mode, group and family segments.
    TooShort,
    /// The group segment has no rules.
    UnknownGroup {
        /// Offending group.
        group: String,
    },
    /// The group is known but the family is not.
    UnknownFamily {
        /// Group segment.
        group: String,
        /// Offending family.
        family: String,
    },
    /// A rule matched except for an unsupported trailing state.
    UnsupportedState {
        /// Offending state segment.
        state: String,
    },
    /// No rule pattern matched.
    NoMatchingRule,
}

impl fmt::Display for UnmappedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmappedReason::TooShort => write!(f, "path too short"),
            UnmappedReason::UnknownGroup { group } => write!(f, "unknown group '{group}'"),
            UnmappedReason::UnknownFamily { group, family } => {
                write!(f, "unknown family '{family}' in group '{group}'")
            }
            UnmappedReason::UnsupportedState { state } => write!(f, "unsupported state '{state}'"),
            UnmappedReason::NoMatchingRule => write!(f, "no matching rule"),
        }
    }
}

/// Result of mapping one path. Mapping never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingOutcome {
    /// The canonical key.
    Mapped(String),
    /// No key; the path is reported as unmapped.
    Unmapped(UnmappedReason),
}

impl MappingOutcome {
    /// The mapped key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            MappingOutcome::Mapped(key) => Some(key),
            MappingOutcome::Unmapped(_) => None,
        }
    }
}

/// Maps the segments following the mode segment: `group.family.rest...`.
pub fn map_segments(segments: &[&str]) -> MappingOutcome {
    let (group, family, rest) = match segments {
        [group, family, rest @ ..] => (*group, *family, rest),
        _ => return MappingOutcome::Unmapped(UnmappedReason::TooShort),
    };
    let Some(entry) = family_for(group, family) else {
        let reason = if is_known_group(group) {
            UnmappedReason::UnknownFamily {
                group: group.to_string(),
                family: family.to_string(),
            }
        } else {
            UnmappedReason::UnknownGroup {
                group: group.to_string(),
            }
        };
        return MappingOutcome::Unmapped(reason);
    };

    let label = to_pascal_case(family);
    let mut unknown_state = None;
    for rule in entry.rules {
        match rule.apply(&label, rest) {
            RuleMatch::Mapped(key) => return MappingOutcome::Mapped(key),
            RuleMatch::UnknownState(state) => {
                unknown_state.get_or_insert(state);
            }
            RuleMatch::NoMatch => {}
        }
    }
    match unknown_state {
        Some(state) => MappingOutcome::Unmapped(UnmappedReason::UnsupportedState { state }),
        None => MappingOutcome::Unmapped(UnmappedReason::NoMatchingRule),
    }
}

/// Maps a full mode path such as `light.Neutral.Background.1.Hover`.
///
/// Returns `None` when the first segment is not a mode; such paths are not
/// mode tokens at all.
pub fn map_mode_path(path: &str) -> Option<(Mode, MappingOutcome)> {
    let segments = split_path(path);
    let (first, rest) = segments.split_first()?;
    let mode = Mode::from_segment(first)?;
    Some((mode, map_segments(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> Option<String> {
        map_mode_path(path).and_then(|(_, outcome)| outcome.key().map(str::to_string))
    }

    #[test]
    fn reasons_distinguish_group_and_family() {
        assert_eq!(
            map_segments(&["Elevation", "Card"]),
            MappingOutcome::Unmapped(UnmappedReason::UnknownGroup { group: "Elevation".into() })
        );
        assert_eq!(
            map_segments(&["Neutral", "Shadow"]),
            MappingOutcome::Unmapped(UnmappedReason::UnknownFamily {
                group: "Neutral".into(),
                family: "Shadow".into()
            })
        );
        assert_eq!(map_segments(&["Neutral"]), MappingOutcome::Unmapped(UnmappedReason::TooShort));
    }

    #[test]
    fn non_mode_paths_are_skipped() {
        assert!(map_mode_path("Spacing.Horizontal.M").is_none());
        assert_eq!(key("dark.Brand.Stroke.2.Contrast").as_deref(), Some("colorBrandStroke2Contrast"));
    }

    #[test]
    fn unknown_states_surface_in_the_reason() {
        assert_eq!(
            map_segments(&["Neutral", "Background", "1", "Focused"]),
            MappingOutcome::Unmapped(UnmappedReason::UnsupportedState { state: "Focused".into() })
        );
        assert_eq!(
            map_segments(&["Neutral", "Background", "42"]),
            MappingOutcome::Unmapped(UnmappedReason::NoMatchingRule)
        );
    }
}
