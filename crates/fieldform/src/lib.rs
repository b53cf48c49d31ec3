//! # fieldform
//!
//! Email, phone and URL inputs that validate themselves, plus a [`Form`] that
//! collects their state and hands a flat payload to a [`Submitter`].
//!
//! ## Flow
//!
//! 1. An [`InputField`] validates each change and reports a [`FieldUpdate`]
//!    (`value` + `is_valid`) through its callback.
//! 2. [`Form::update`] merges the update into the named [`FieldDescriptor`],
//!    re-checking it against the field's own rules. [`Form::bind_inputs`]
//!    wires each input to an [`UpdateQueue`] sink carrying its field name, and
//!    [`Form::apply`] merges whatever the inputs reported.
//! 3. [`Form::submit`] flattens every field to `name -> value` and passes the
//!    [`SubmitPayload`] to the submitter without waiting on it.
//!
//! ## Example
//!
//! ```rust
//! use fieldform::{FieldRules, Form, FieldType};
//!
//! let mut form = Form::builder("https://example.com/signup")
//!     .field("email", FieldType::from("email"), FieldRules::bounded(6, 30), None)
//!     .build()
//!     .unwrap();
//!
//! form.handle_change("email", "me@example.com").unwrap();
//! assert!(form.all_valid());
//!
//! form.submit(&|destination: &str, payload: &fieldform::SubmitPayload| {
//!     assert_eq!(destination, "https://example.com/signup");
//!     assert_eq!(payload.get("email"), Some("me@example.com"));
//! });
//! ```

pub mod descriptor;
pub mod error;
pub mod events;
pub mod form;
pub mod input;
pub mod payload;
pub mod schema;
pub mod submit;

pub use descriptor::{FieldDescriptor, FieldRules, FieldType, FieldUpdate};
pub use error::{FormError, PropsError};
pub use events::{FieldSink, UpdateQueue};
pub use form::{Form, FormBuilder, FormState};
pub use input::{InputField, InputProps, OnSetValue};
pub use payload::SubmitPayload;
pub use schema::{FieldSchema, FormSchema};
pub use submit::{LogSubmitter, Submitter};

pub use fieldform_validation::{InputKind, LengthBounds, VisualState};
