//! Interaction states.

use serde::{Deserialize, Serialize};

/// Interaction state carried by the trailing segment of a mode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Absent segment or `Rest`; adds no suffix.
    Rest,
    /// `Hover`.
    Hover,
    /// `Pressed`.
    Pressed,
    /// `Selected`.
    Selected,
}

impl State {
    /// Every state a key can carry.
    pub const ALL: &'static [State] = &[State::Rest, State::Hover, State::Pressed, State::Selected];

    /// Parses an optional trailing segment; `None` for unsupported names.
    pub fn parse(segment: Option<&str>) -> Option<Self> {
        match segment {
            None | Some("Rest") => Some(State::Rest),
            Some("Hover") => Some(State::Hover),
            Some("Pressed") => Some(State::Pressed),
            Some("Selected") => Some(State::Selected),
            Some(_) => None,
        }
    }

    /// Suffix appended to the base key.
    pub fn suffix(&self) -> &'static str {
        match self {
            State::Rest => "",
            State::Hover => "Hover",
            State::Pressed => "Pressed",
            State::Selected => "Selected",
        }
    }
}
