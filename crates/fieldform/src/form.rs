// File: src/form.rs
// Purpose: Form aggregator owning every field's state

use indexmap::IndexMap;

use fieldform_validation::VisualState;

use crate::descriptor::{FieldDescriptor, FieldRules, FieldType, FieldUpdate};
use crate::error::FormError;
use crate::events::{FieldSink, UpdateQueue};
use crate::input::{InputField, InputProps};
use crate::payload::SubmitPayload;
use crate::submit::Submitter;

/// Field name to descriptor, in declaration order.
pub type FormState = IndexMap<String, FieldDescriptor>;

/// Collects field declarations and builds a [`Form`].
#[derive(Debug, Clone)]
pub struct FormBuilder {
    destination: String,
    fields: Vec<(String, FieldDescriptor)>,
}

impl FormBuilder {
    /// Declares a field. Order of declaration is the render order.
    pub fn field(
        mut self,
        name: impl Into<String>,
        field_type: FieldType,
        rules: FieldRules,
        placeholder: Option<String>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FieldDescriptor::new(field_type, rules, placeholder),
        ));
        self
    }

    /// Fails if a name is declared twice.
    pub fn build(self) -> Result<Form, FormError> {
        let mut state = FormState::with_capacity(self.fields.len());

        for (name, descriptor) in self.fields {
            if state.contains_key(&name) {
                return Err(FormError::DuplicateField(name));
            }
            state.insert(name, descriptor);
        }

        Ok(Form {
            destination: self.destination,
            state,
        })
    }
}

/// Owns the form state. Fields are fixed at construction; only their
/// `value`/`is_valid` pair ever changes, and only through [`Form::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    destination: String,
    state: FormState,
}

impl Form {
    pub fn builder(destination: impl Into<String>) -> FormBuilder {
        FormBuilder {
            destination: destination.into(),
            fields: Vec::new(),
        }
    }

    /// Where [`Form::submit`] sends the payload.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.state.get(name)
    }

    /// Merges an update into the named field.
    ///
    /// Validity is recomputed with the field's own validator and rules.
    /// Unknown names are rejected rather than silently ignored.
    pub fn update(&mut self, field_name: &str, update: FieldUpdate) -> Result<(), FormError> {
        match self.state.get_mut(field_name) {
            Some(descriptor) => {
                descriptor.merge(update);
                Ok(())
            }
            None => {
                tracing::warn!(field = field_name, "update for unknown field rejected");
                Err(FormError::UnknownField(field_name.to_string()))
            }
        }
    }

    /// Validates `raw` with the field's own validator, then merges it.
    pub fn handle_change(&mut self, field_name: &str, raw: &str) -> Result<VisualState, FormError> {
        let descriptor = self
            .state
            .get(field_name)
            .ok_or_else(|| FormError::UnknownField(field_name.to_string()))?;

        let update = descriptor
            .evaluate(raw)
            .ok_or_else(|| FormError::UnsupportedType {
                name: field_name.to_string(),
                field_type: descriptor.field_type.to_string(),
            })?;

        self.update(field_name, update)?;
        Ok(VisualState::from_validity(
            self.state.get(field_name).is_some_and(|d| d.is_valid),
        ))
    }

    /// Props for every renderable field, in declaration order.
    ///
    /// Fields whose type has no validator are left out without error.
    pub fn render(&self) -> Vec<InputProps> {
        self.state
            .iter()
            .filter_map(|(name, descriptor)| {
                let Some(kind) = descriptor.field_type.kind() else {
                    tracing::debug!(
                        field = name.as_str(),
                        field_type = descriptor.field_type.as_str(),
                        "skipping field with unrecognized type"
                    );
                    return None;
                };

                Some(InputProps {
                    name: name.clone(),
                    kind,
                    value: descriptor.value.clone(),
                    is_valid: descriptor.is_valid,
                    placeholder: descriptor.placeholder.clone(),
                    required: descriptor.rules.required,
                    min_length: descriptor.rules.min_length,
                    max_length: descriptor.rules.max_length,
                })
            })
            .collect()
    }

    /// Renders every field as a live input whose updates land in `queue`,
    /// tagged with the field's name.
    ///
    /// Inputs with rejected props are logged by [`InputField::new`] and left out.
    pub fn bind_inputs(&self, queue: &UpdateQueue) -> Vec<InputField<FieldSink>> {
        self.render()
            .into_iter()
            .filter_map(|props| {
                let sink = queue.sink(props.name.clone());
                InputField::new(props, sink).ok()
            })
            .collect()
    }

    /// Merges every queued update, oldest first, and returns how many landed.
    ///
    /// An unknown name does not stop the rest; the first one is reported
    /// once the queue is empty.
    pub fn apply(&mut self, queue: &UpdateQueue) -> Result<usize, FormError> {
        let mut applied = 0;
        let mut first_error = None;

        for (name, update) in queue.drain() {
            match self.update(&name, update) {
                Ok(()) => applied += 1,
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(applied),
        }
    }

    /// Names of renderable fields that are currently invalid.
    pub fn invalid_fields(&self) -> Vec<String> {
        self.state
            .iter()
            .filter(|(_, d)| d.field_type.kind().is_some() && !d.is_valid)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Whether every renderable field is valid.
    ///
    /// Fields with unrecognized types never render, so they are not counted.
    pub fn all_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// Flattens the state to `name -> value`, every declared field included.
    pub fn payload(&self) -> SubmitPayload {
        self.state
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor.value.as_str()))
            .collect()
    }

    /// Sends the payload to the configured destination.
    ///
    /// Does not check validity and does not wait on the submitter.
    pub fn submit<S: Submitter + ?Sized>(&self, submitter: &S) {
        self.submit_to(&self.destination, submitter);
    }

    /// Sends the payload to an explicit destination.
    pub fn submit_to<S: Submitter + ?Sized>(&self, destination: &str, submitter: &S) {
        let payload = self.payload();
        tracing::debug!(destination, fields = payload.len(), "submitting form");
        submitter.submit(destination, &payload);
    }

    /// Submits only when [`Form::all_valid`] holds.
    pub fn submit_if_valid<S: Submitter + ?Sized>(&self, submitter: &S) -> Result<(), FormError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            tracing::debug!(invalid = ?invalid, "submission blocked by invalid fields");
            return Err(FormError::InvalidFields(invalid));
        }

        self.submit(submitter);
        Ok(())
    }
}
