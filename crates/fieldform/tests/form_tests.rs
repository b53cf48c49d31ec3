//! End-to-end tests for fieldform
//!
//! Covers the full path from input change to submitted payload:
//! - Validator properties across all input kinds
//! - Inputs reporting through callbacks into a form
//! - Submission payloads and destinations
//! - Fields with unrecognized types

use fieldform::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::cell::RefCell;

/// Records every submission it receives.
#[derive(Default)]
struct RecordingSubmitter {
    sent: RefCell<Vec<(String, SubmitPayload)>>,
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, destination: &str, payload: &SubmitPayload) {
        self.sent
            .borrow_mut()
            .push((destination.to_string(), payload.clone()));
    }
}

fn signup_schema() -> FormSchema {
    FormSchema::from_toml_str(
        r#"
destination = "https://example.com/signup"

[[fields]]
name = "email"
type = "email"
min_length = 6
max_length = 30

[[fields]]
name = "phone"
type = "phone"
min_length = 10
max_length = 10
"#,
    )
    .unwrap()
}

#[rstest]
#[case("")]
#[case("no-at-sign.com")]
#[case("plain")]
#[case("www.example.com")]
fn test_email_without_at_is_invalid(#[case] value: &str) {
    assert!(!InputKind::Email.validate(value, LengthBounds::NONE));
}

#[rstest]
#[case("a@b.co")]
#[case("x@y.z")]
#[case("hello@mail.example.org")]
fn test_email_with_single_at_and_dotted_domain_is_valid(#[case] value: &str) {
    assert!(InputKind::Email.validate(value, LengthBounds::NONE));
}

#[rstest]
#[case("0")]
#[case("42")]
#[case("1234567890")]
fn test_digit_strings_are_valid_phones(#[case] value: &str) {
    assert!(InputKind::Phone.validate(value, LengthBounds::NONE));
}

#[rstest]
#[case("abc")]
#[case("12-34")]
#[case("#1")]
fn test_non_numeric_phones_are_invalid(#[case] value: &str) {
    assert!(!InputKind::Phone.validate(value, LengthBounds::NONE));
}

#[rstest]
#[case("google.com", true)]
#[case("http://google.com", true)]
#[case("https://google", false)]
fn test_url_cases(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(InputKind::Url.validate(value, LengthBounds::NONE), expected);
}

#[test]
fn test_min_length_rejects_structurally_valid_values() {
    let bounds = LengthBounds::new(Some(20), None);
    assert!(!InputKind::Email.validate("a@b.co", bounds));
    assert!(!InputKind::Phone.validate("1234567890", bounds));
    assert!(!InputKind::Url.validate("google.com", bounds));
}

#[test]
fn test_max_length_rejects_structurally_valid_values() {
    let bounds = LengthBounds::new(None, Some(5));
    assert!(!InputKind::Email.validate("a@b.co", bounds));
    assert!(!InputKind::Phone.validate("1234567890", bounds));
    assert!(!InputKind::Url.validate("google.com", bounds));
}

#[test]
fn test_signup_submits_values_to_destination() {
    let mut form = signup_schema().build().unwrap();

    assert_eq!(form.handle_change("email", "a@b.co").unwrap(), VisualState::Valid);
    assert_eq!(
        form.handle_change("phone", "1234567890").unwrap(),
        VisualState::Valid
    );

    let submitter = RecordingSubmitter::default();
    form.submit(&submitter);

    let sent = submitter.sent.into_inner();
    assert_eq!(sent.len(), 1);

    let (destination, payload) = &sent[0];
    assert_eq!(destination, "https://example.com/signup");

    let expected: SubmitPayload = [("email", "a@b.co"), ("phone", "1234567890")]
        .into_iter()
        .collect();
    assert_eq!(payload, &expected);
}

#[test]
fn test_inputs_report_into_form_through_bound_sinks() {
    let mut form = signup_schema().build().unwrap();
    let queue = UpdateQueue::new();

    let mut inputs = form.bind_inputs(&queue);
    assert_eq!(inputs.len(), 2);

    assert_eq!(inputs[0].on_change("a@b.co"), VisualState::Valid);
    assert_eq!(inputs[1].on_change("12345"), VisualState::Invalid);
    assert_eq!(form.apply(&queue), Ok(2));

    assert!(form.field("email").unwrap().is_valid);
    assert!(!form.field("phone").unwrap().is_valid);
    assert_eq!(form.invalid_fields(), vec!["phone".to_string()]);

    assert_eq!(inputs[1].on_change("1234567890"), VisualState::Valid);
    assert_eq!(form.apply(&queue), Ok(1));
    assert!(form.all_valid());
}

#[test]
fn test_foreign_update_cannot_pass_validity_guard() {
    let mut form = signup_schema().build().unwrap();
    form.handle_change("email", "a@b.co").unwrap();

    let update = FieldUpdate::evaluate(InputKind::Email, "a@b.co", LengthBounds::NONE);
    form.update("phone", update).unwrap();

    let submitter = RecordingSubmitter::default();
    assert_eq!(
        form.submit_if_valid(&submitter),
        Err(FormError::InvalidFields(vec!["phone".to_string()]))
    );
    assert!(submitter.sent.into_inner().is_empty());
}

#[test]
fn test_submit_does_not_require_valid_fields() {
    let mut form = signup_schema().build().unwrap();
    form.handle_change("email", "not-an-email").unwrap();

    let submitter = RecordingSubmitter::default();
    form.submit(&submitter);

    let sent = submitter.sent.into_inner();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1.get("email"), Some("not-an-email"));
    assert_eq!(sent[0].1.get("phone"), Some(""));
}

#[test]
fn test_repeated_submits_are_not_deduplicated() {
    let form = signup_schema().build().unwrap();
    let submitter = RecordingSubmitter::default();

    form.submit(&submitter);
    form.submit_to("/elsewhere", &submitter);

    let sent = submitter.sent.into_inner();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0, "/elsewhere");
}

#[test]
fn test_mistyped_field_renders_nothing() {
    let schema = FormSchema::from_toml_str(
        r#"
destination = "/x"

[[fields]]
name = "email"
type = "invalidType"
"#,
    )
    .unwrap();

    let form = schema.build().unwrap();
    assert!(form.render().is_empty());
    // Nothing renderable means nothing to block on
    assert!(form.all_valid());
}

/// Deliberate deviation: unknown names are reported instead of ignored.
#[test]
fn test_unknown_field_update_is_an_error() {
    let mut form = signup_schema().build().unwrap();
    let update = FieldUpdate::evaluate(InputKind::Email, "a@b.co", LengthBounds::NONE);

    let err = form.update("mail", update).unwrap_err();
    assert_eq!(err.to_string(), "form has no field named `mail`");
}
