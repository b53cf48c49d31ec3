//! Visual state of an input

use std::fmt;

/// Class every input carries regardless of state.
pub const BASE_CLASS: &str = "Input";

/// Valid/invalid label derived from a validation result.
///
/// Recomputed on every change; there is no separate "untouched" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Valid,
    Invalid,
}

impl VisualState {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid {
            VisualState::Valid
        } else {
            VisualState::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, VisualState::Valid)
    }

    /// Modifier class for the presentation layer.
    pub fn class_name(self) -> &'static str {
        match self {
            VisualState::Valid => "Input--valid",
            VisualState::Invalid => "Input--invalid",
        }
    }

    /// Base class plus modifier, ready to be joined into a `class` attribute.
    pub fn classes(self) -> [&'static str; 2] {
        [BASE_CLASS, self.class_name()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::Valid => "valid",
            VisualState::Invalid => "invalid",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for VisualState {
    fn from(is_valid: bool) -> Self {
        Self::from_validity(is_valid)
    }
}
