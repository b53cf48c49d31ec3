//! Input kinds and dispatch to their validators

use std::fmt;

use crate::bounds::LengthBounds;
use crate::email::is_valid_email;
use crate::phone::is_valid_phone;
use crate::state::VisualState;
use crate::url::is_valid_url;

/// The input kinds that carry their own validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Email,
    Phone,
    Url,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [InputKind::Email, InputKind::Phone, InputKind::Url];

    /// Looks up a kind by its lowercase name (`"email"`, `"phone"`, `"url"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "email" => Some(InputKind::Email),
            "phone" => Some(InputKind::Phone),
            "url" => Some(InputKind::Url),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Phone => "phone",
            InputKind::Url => "url",
        }
    }

    /// HTML `type` attribute for the rendered input.
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Phone => "tel",
            InputKind::Url => "url",
        }
    }

    /// Runs the validator for this kind.
    pub fn validate(self, value: &str, bounds: LengthBounds) -> bool {
        match self {
            InputKind::Email => is_valid_email(value, bounds),
            InputKind::Phone => is_valid_phone(value, bounds),
            InputKind::Url => is_valid_url(value, bounds),
        }
    }

    /// Validates and maps the result straight to its visual state.
    pub fn visual_state(self, value: &str, bounds: LengthBounds) -> VisualState {
        VisualState::from_validity(self.validate(value, bounds))
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
