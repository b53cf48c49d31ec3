// File: src/schema.rs
// Purpose: Declarative form definitions loaded from TOML or JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::descriptor::{FieldRules, FieldType};
use crate::error::FormError;
use crate::form::Form;

/// A form definition, e.g. from `signup.toml`:
///
/// ```toml
/// destination = "https://example.com/signup"
///
/// [[fields]]
/// name = "email"
/// type = "email"
/// min_length = 6
/// max_length = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSchema {
    pub destination: String,

    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// One field in a [`FormSchema`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,

    /// Kept as written; unknown types load fine and are skipped at render.
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default = "default_true")]
    pub required: bool,

    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_true() -> bool {
    true
}

impl FieldSchema {
    pub fn rules(&self) -> FieldRules {
        FieldRules {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }
}

impl FormSchema {
    /// Loads a schema file; `.json` files are read as JSON, anything else as TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form schema: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let schema = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        schema.with_context(|| format!("Invalid form schema: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse form schema TOML")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse form schema JSON")
    }

    /// Builds a fresh form with every field empty and invalid.
    pub fn build(&self) -> Result<Form, FormError> {
        self.fields
            .iter()
            .fold(Form::builder(&self.destination), |builder, field| {
                builder.field(
                    &field.name,
                    FieldType::from(field.field_type.as_str()),
                    field.rules(),
                    field.placeholder.clone(),
                )
            })
            .build()
    }
}
