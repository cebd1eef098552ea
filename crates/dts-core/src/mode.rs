//! Theme modes and per-mode containers.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Theme mode a mapped entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Mode {
    /// Every mode, in report order.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Returns the path segment naming the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Parses the leading segment of a mode token path.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            _ => None,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per theme mode, serialized as `{ "light": .., "dark": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerMode<T> {
    /// Light mode value.
    pub light: T,
    /// Dark mode value.
    pub dark: T,
}

impl<T> PerMode<T> {
    /// Builds a pair by evaluating `f` once per mode.
    pub fn from_fn(mut f: impl FnMut(Mode) -> T) -> Self {
        Self {
            light: f(Mode::Light),
            dark: f(Mode::Dark),
        }
    }

    /// Returns the value for `mode`.
    pub fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Returns a mutable reference to the value for `mode`.
    pub fn get_mut(&mut self, mode: Mode) -> &mut T {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    /// Iterates `(mode, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &T)> {
        Mode::ALL.into_iter().map(move |mode| (mode, self.get(mode)))
    }

    /// Maps both values through `f`.
    pub fn map<U>(&self, mut f: impl FnMut(Mode, &T) -> U) -> PerMode<U> {
        PerMode {
            light: f(Mode::Light, &self.light),
            dark: f(Mode::Dark, &self.dark),
        }
    }
}
