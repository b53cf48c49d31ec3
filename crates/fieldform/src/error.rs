// File: src/error.rs
// Purpose: Error types for form construction, updates and input props

use thiserror::Error;

/// Errors raised by the form aggregator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("form has no field named `{0}`")]
    UnknownField(String),

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("field `{name}` has type `{field_type}`, which has no validator")]
    UnsupportedType { name: String, field_type: String },

    #[error("form has invalid fields: {}", .0.join(", "))]
    InvalidFields(Vec<String>),
}

/// Errors raised when an input is built from incomplete props.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropsError {
    #[error("{kind} input expects a non-empty `name`")]
    MissingName { kind: &'static str },
}
