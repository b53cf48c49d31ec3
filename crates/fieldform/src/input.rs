// File: src/input.rs
// Purpose: Input components that validate on change and report upward

use fieldform_validation::{InputKind, LengthBounds, VisualState, BASE_CLASS};

use crate::descriptor::FieldUpdate;
use crate::error::PropsError;

/// Everything a form hands down to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    pub is_valid: bool,
    pub placeholder: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl InputProps {
    /// Minimal props: an empty, invalid input with no bounds.
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            is_valid: false,
            placeholder: None,
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    pub fn bounds(&self) -> LengthBounds {
        LengthBounds::new(self.min_length, self.max_length)
    }

    /// HTML attributes for the rendered `<input>`.
    pub fn html_attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("type", self.kind.html_type().to_string()),
            ("name", self.name.clone()),
            ("value", self.value.clone()),
            ("data-test", format!("component-{}", component_name(self.kind))),
        ];

        if self.required {
            attrs.push(("required", String::new()));
        }
        if let Some(placeholder) = &self.placeholder {
            attrs.push(("placeholder", placeholder.clone()));
        }
        if let Some(min) = self.bounds().effective_min() {
            attrs.push(("minlength", min.to_string()));
        }
        if let Some(max) = self.bounds().effective_max() {
            attrs.push(("maxlength", max.to_string()));
        }

        attrs
    }
}

fn component_name(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Email => "EmailInput",
        InputKind::Phone => "PhoneInput",
        InputKind::Url => "UrlInput",
    }
}

/// Receives the update an input reports on every change.
pub trait OnSetValue {
    fn set_value(&mut self, update: FieldUpdate);
}

impl<F> OnSetValue for F
where
    F: FnMut(FieldUpdate),
{
    fn set_value(&mut self, update: FieldUpdate) {
        self(update)
    }
}

/// A live input bound to a change callback.
///
/// Each change is validated, reported through the callback as a
/// [`FieldUpdate`], and reflected in the input's own visual state.
pub struct InputField<F>
where
    F: OnSetValue,
{
    props: InputProps,
    on_set_value: F,
    visual: Option<VisualState>,
}

impl<F> InputField<F>
where
    F: OnSetValue,
{
    /// Builds the input, rejecting props that cannot be rendered.
    ///
    /// Rejections are logged; the caller decides whether to render nothing.
    pub fn new(props: InputProps, on_set_value: F) -> Result<Self, PropsError> {
        if props.name.trim().is_empty() {
            let kind = component_name(props.kind);
            tracing::error!(input = kind, "{} expects a non-empty `name`, not rendering", kind);
            return Err(PropsError::MissingName { kind });
        }

        Ok(Self {
            props,
            on_set_value,
            visual: None,
        })
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    pub fn name(&self) -> &str {
        &self.props.name
    }

    /// Visual state after the most recent change, `None` before any change.
    pub fn visual_state(&self) -> Option<VisualState> {
        self.visual
    }

    /// Classes for the `class` attribute.
    pub fn classes(&self) -> Vec<&'static str> {
        match self.visual {
            Some(state) => state.classes().to_vec(),
            None => vec![BASE_CLASS],
        }
    }

    /// Handles an input change event carrying `value`.
    pub fn on_change(&mut self, value: &str) -> VisualState {
        let update = FieldUpdate::evaluate(self.props.kind, value, self.props.bounds());
        let state = VisualState::from_validity(update.is_valid());

        self.props.value = update.value().to_string();
        self.props.is_valid = update.is_valid();
        self.on_set_value.set_value(update);

        self.visual = Some(state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared with a test subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_missing_name_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            InputField::new(InputProps::new("", InputKind::Phone), |_: FieldUpdate| {})
        });

        assert!(result.is_err());
        let output = logs.contents();
        assert!(output.contains("ERROR"), "unexpected log output: {output}");
        assert!(output.contains("PhoneInput expects a non-empty `name`"));
    }

    #[test]
    fn test_named_input_logs_nothing() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            InputField::new(InputProps::new("phone", InputKind::Phone), |_: FieldUpdate| {})
        });

        assert!(result.is_ok());
        assert_eq!(logs.contents(), "");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = InputField::new(InputProps::new("", InputKind::Email), |_: FieldUpdate| {});
        assert_eq!(
            result.err(),
            Some(PropsError::MissingName { kind: "EmailInput" })
        );

        let result = InputField::new(InputProps::new("   ", InputKind::Url), |_: FieldUpdate| {});
        assert!(result.is_err());
    }

    #[test]
    fn test_on_change_reports_update() {
        let mut updates = Vec::new();
        {
            let mut input = InputField::new(InputProps::new("email", InputKind::Email), |u: FieldUpdate| {
                updates.push(u)
            })
            .unwrap();

            assert_eq!(input.visual_state(), None);
            assert_eq!(input.classes(), vec!["Input"]);

            assert_eq!(input.on_change("a@"), VisualState::Invalid);
            assert_eq!(input.on_change("a@b.co"), VisualState::Valid);
            assert_eq!(input.classes(), vec!["Input", "Input--valid"]);
            assert_eq!(input.props().value, "a@b.co");
            assert!(input.props().is_valid);
        }

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].value(), "a@");
        assert!(!updates[0].is_valid());
        assert!(updates[1].is_valid());
    }

    #[test]
    fn test_clearing_returns_to_invalid() {
        let mut input =
            InputField::new(InputProps::new("phone", InputKind::Phone), |_: FieldUpdate| {}).unwrap();
        input.on_change("123");
        assert_eq!(input.on_change(""), VisualState::Invalid);
        assert_eq!(input.classes(), vec!["Input", "Input--invalid"]);
    }

    #[test]
    fn test_bounds_from_props() {
        let mut props = InputProps::new("phone", InputKind::Phone);
        props.min_length = Some(10);
        props.max_length = Some(10);

        let mut input = InputField::new(props, |_: FieldUpdate| {}).unwrap();
        assert_eq!(input.on_change("12345"), VisualState::Invalid);
        assert_eq!(input.on_change("1234567890"), VisualState::Valid);
    }

    #[test]
    fn test_html_attrs() {
        let mut props = InputProps::new("site", InputKind::Url);
        props.required = true;
        props.placeholder = Some("example.com".to_string());
        props.min_length = Some(0);
        props.max_length = Some(80);

        let attrs = props.html_attrs();
        assert!(attrs.contains(&("type", "url".to_string())));
        assert!(attrs.contains(&("data-test", "component-UrlInput".to_string())));
        assert!(attrs.contains(&("required", String::new())));
        assert!(attrs.contains(&("maxlength", "80".to_string())));
        // A zero bound is never enforced, so it is not rendered either
        assert!(!attrs.iter().any(|(k, _)| *k == "minlength"));
    }
}
