// File: src/descriptor.rs
// Purpose: Per-field record held by the form and the update merged into it

use std::fmt;

use fieldform_validation::{InputKind, LengthBounds};

/// Declared type of a field.
///
/// Types without a validator are kept so the field still takes part in the
/// payload, but they never render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Input(InputKind),
    Unrecognized(String),
}

impl FieldType {
    /// The input kind, if this type has a validator.
    pub fn kind(&self) -> Option<InputKind> {
        match self {
            FieldType::Input(kind) => Some(*kind),
            FieldType::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Input(kind) => kind.as_str(),
            FieldType::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        match InputKind::from_name(name) {
            Some(kind) => FieldType::Input(kind),
            None => FieldType::Unrecognized(name.to_string()),
        }
    }
}

impl From<InputKind> for FieldType {
    fn from(kind: InputKind) -> Self {
        FieldType::Input(kind)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    /// Passed through to the rendered input. Empty values are rejected by
    /// every validator whether or not this is set.
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRules {
    pub fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub fn bounded(min_length: usize, max_length: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min_length),
            max_length: Some(max_length),
        }
    }

    pub fn bounds(&self) -> LengthBounds {
        LengthBounds::new(self.min_length, self.max_length)
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::required()
    }
}

/// A validated change reported by an input.
///
/// Only a validator can produce one. `is_valid` reflects the kind and bounds
/// the input checked against; [`FieldDescriptor::merge`] re-checks the value
/// against the field's own rules before storing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    value: String,
    is_valid: bool,
}

impl FieldUpdate {
    /// Validates `value` as `kind` under `bounds`.
    pub fn evaluate(kind: InputKind, value: impl Into<String>, bounds: LengthBounds) -> Self {
        let value = value.into();
        let is_valid = kind.validate(&value, bounds);
        Self { value, is_valid }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// One field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub value: String,
    pub is_valid: bool,
    pub field_type: FieldType,
    pub rules: FieldRules,
    /// Display only.
    pub placeholder: Option<String>,
}

impl FieldDescriptor {
    /// A fresh, empty field. Empty input never validates, so it starts invalid.
    pub fn new(field_type: FieldType, rules: FieldRules, placeholder: Option<String>) -> Self {
        Self {
            value: String::new(),
            is_valid: false,
            field_type,
            rules,
            placeholder,
        }
    }

    /// Merges an update, touching only `value` and `is_valid`.
    ///
    /// `is_valid` is recomputed with this field's validator and rules, so an
    /// update checked as another kind or under other bounds cannot mark the
    /// field valid. Fields without a validator stay invalid.
    pub fn merge(&mut self, update: FieldUpdate) {
        self.is_valid = match self.field_type.kind() {
            Some(kind) => kind.validate(&update.value, self.rules.bounds()),
            None => false,
        };
        self.value = update.value;
    }

    /// Validates `raw` with this field's own validator and rules.
    ///
    /// Returns `None` for types without a validator.
    pub fn evaluate(&self, raw: &str) -> Option<FieldUpdate> {
        self.field_type
            .kind()
            .map(|kind| FieldUpdate::evaluate(kind, raw, self.rules.bounds()))
    }
}
