//! Contact form state, validation and submission.
//!
//! Everything here is independent of the browser so it can be exercised
//! natively. The page component keeps a `ContactFormState` in a `use_state`
//! handle and calls into it from its event handlers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
    PreferredTime,
    Consent,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Message,
        Field::PreferredTime,
        Field::Consent,
    ];

    /// The `name` attribute used for the matching input element.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
            Field::PreferredTime => "preferredTime",
            Field::Consent => "consent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("no form field named `{0}`")]
    UnknownField(String),
    #[error("field `{field}` does not accept a {kind} value")]
    ValueKind { field: Field, kind: &'static str },
}

/// Field snapshot handed to the submission sink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub preferred_time: String,
    pub consent: bool,
}

impl ContactForm {
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Phone => Some(&self.phone),
            Field::Email => Some(&self.email),
            Field::Message => Some(&self.message),
            Field::PreferredTime => Some(&self.preferred_time),
            Field::Consent => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Phone => Some(&mut self.phone),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::PreferredTime => Some(&mut self.preferred_time),
            Field::Consent => None,
        }
    }
}

/// Per-field validation messages. A missing entry means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }
}

impl FromIterator<(Field, &'static str)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, &'static str)>>(iter: I) -> Self {
        FieldErrors(
            iter.into_iter()
                .map(|(field, message)| (field, message.to_string()))
                .collect(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: FieldErrors,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Runs every rule independently so each invalid field gets its own message.
pub fn validate(form: &ContactForm) -> Validation {
    let mut errors = FieldErrors::default();

    if is_blank(&form.name) {
        errors.insert(Field::Name, "Name is required.");
    }
    if is_blank(&form.phone) {
        errors.insert(Field::Phone, "Phone is required.");
    }
    if is_blank(&form.email) {
        errors.insert(Field::Email, "Email is required.");
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(Field::Email, "Invalid email.");
    }
    if is_blank(&form.message) {
        errors.insert(Field::Message, "This field is required.");
    }
    if is_blank(&form.preferred_time) {
        errors.insert(Field::PreferredTime, "Preferred time is required.");
    }
    if !form.consent {
        errors.insert(Field::Consent, "Consent is required.");
    }

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

/// Destination for a validated field snapshot.
pub trait SubmissionSink {
    fn accept(&self, snapshot: &ContactForm) -> Acknowledgement;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Accepted(Acknowledgement),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactForm,
    pub errors: FieldErrors,
}

impl ContactFormState {
    /// Stores an edit. A stale error on the edited field is dropped without
    /// re-validating; other fields keep theirs.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::Consent, FieldValue::Checked(checked)) => {
                self.fields.consent = checked;
            }
            (Field::Consent, FieldValue::Text(_)) => {
                return Err(FormError::ValueKind { field, kind: "text" });
            }
            (_, FieldValue::Checked(_)) => {
                return Err(FormError::ValueKind { field, kind: "checked" });
            }
            (_, FieldValue::Text(text)) => {
                if let Some(slot) = self.fields.text_mut(field) {
                    *slot = text;
                }
            }
        }

        if self.errors.clear(field) {
            log::debug!("Cleared error for {}", field);
        }
        Ok(())
    }

    /// Same as `set_field` but resolves the field from an input's `name`.
    pub fn set_named(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value)
    }

    pub fn validate(&self) -> Validation {
        validate(&self.fields)
    }

    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> SubmitOutcome {
        let Validation { valid, errors } = self.validate();
        self.errors = errors;
        if !valid {
            log::debug!("Submission blocked by {} field error(s)", self.errors.len());
            return SubmitOutcome::Rejected;
        }
        SubmitOutcome::Accepted(sink.accept(&self.fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<ContactForm>>,
    }

    impl SubmissionSink for RecordingSink {
        fn accept(&self, snapshot: &ContactForm) -> Acknowledgement {
            self.received.borrow_mut().push(snapshot.clone());
            Acknowledgement {
                message: "Form submitted!".to_string(),
            }
        }
    }

    fn errors(pairs: &[(Field, &'static str)]) -> FieldErrors {
        pairs.iter().copied().collect()
    }

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            phone: "1234567890".to_string(),
            email: "jane@example.com".to_string(),
            message: "hi".to_string(),
            preferred_time: "mornings".to_string(),
            consent: true,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        let validation = validate(&jane());
        assert!(validation.valid);
        assert_eq!(validation.errors, FieldErrors::default());
    }

    #[test]
    fn each_blank_text_field_gets_exactly_its_own_error() {
        let cases = [
            (Field::Name, "Name is required."),
            (Field::Phone, "Phone is required."),
            (Field::Email, "Email is required."),
            (Field::Message, "This field is required."),
            (Field::PreferredTime, "Preferred time is required."),
        ];
        for (field, message) in cases {
            for blank in ["", "   ", "\t\n"] {
                let mut form = jane();
                *form.text_mut(field).unwrap() = blank.to_string();

                let validation = validate(&form);
                assert!(!validation.valid, "{} = {:?} should be invalid", field, blank);
                assert_eq!(validation.errors, errors(&[(field, message)]));
            }
        }
    }

    #[test]
    fn missing_consent() {
        let mut form = jane();
        form.consent = false;

        let validation = validate(&form);
        assert!(!validation.valid);
        assert_eq!(
            validation.errors,
            errors(&[(Field::Consent, "Consent is required.")])
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let validation = validate(&ContactForm::default());
        assert!(!validation.valid);
        assert_eq!(validation.errors.len(), 6);
        assert_eq!(validation.errors.get(Field::Email), Some("Email is required."));
    }

    #[test]
    fn email_shape() {
        let check = |email: &str| {
            let mut form = jane();
            form.email = email.to_string();
            validate(&form).errors.get(Field::Email).map(str::to_string)
        };

        assert_eq!(check("a@b.c"), Some("Invalid email.".to_string()));
        assert_eq!(check("a@b.co"), None);
        assert_eq!(check("Jane.Doe+x@Example.ORG"), None);
        assert_eq!(check("no-at-sign.com"), Some("Invalid email.".to_string()));
        assert_eq!(check("a@b"), Some("Invalid email.".to_string()));
        // Format is checked on the raw value, so padding fails it.
        assert_eq!(check(" a@b.co"), Some("Invalid email.".to_string()));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut form = jane();
        form.email = "bad".to_string();
        form.name.clear();
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut state = ContactFormState::default();
        let sink = RecordingSink::default();
        assert_eq!(state.submit(&sink), SubmitOutcome::Rejected);
        assert_eq!(state.errors.len(), 6);

        state
            .set_field(Field::Phone, FieldValue::Text("5".to_string()))
            .unwrap();
        assert!(!state.errors.contains(Field::Phone));
        assert_eq!(state.errors.len(), 5);
        assert_eq!(state.errors.get(Field::Name), Some("Name is required."));

        state.set_field(Field::Consent, FieldValue::Checked(true)).unwrap();
        assert!(!state.errors.contains(Field::Consent));
        assert_eq!(state.errors.len(), 4);
    }

    #[test]
    fn editing_does_not_revalidate() {
        let mut state = ContactFormState::default();
        state.submit(&RecordingSink::default());

        // A blank edit still clears the message until the next submit.
        state
            .set_field(Field::Name, FieldValue::Text("  ".to_string()))
            .unwrap();
        assert!(!state.errors.contains(Field::Name));

        state.submit(&RecordingSink::default());
        assert_eq!(state.errors.get(Field::Name), Some("Name is required."));
    }

    #[test]
    fn resubmitting_replaces_errors_wholesale() {
        let mut state = ContactFormState::default();
        state.submit(&RecordingSink::default());

        state.fields = jane();
        state.fields.email = "a@b.c".to_string();
        state.submit(&RecordingSink::default());
        assert_eq!(
            state.errors,
            errors(&[(Field::Email, "Invalid email.")])
        );
    }

    #[test]
    fn valid_submission_reaches_sink_once() {
        let mut state = ContactFormState::default();
        for (name, value) in [
            ("name", "Jane"),
            ("phone", "1234567890"),
            ("email", "jane@example.com"),
            ("message", "hi"),
            ("preferredTime", "mornings"),
        ] {
            state
                .set_named(name, FieldValue::Text(value.to_string()))
                .unwrap();
        }
        state.set_named("consent", FieldValue::Checked(true)).unwrap();

        assert_eq!(state.validate(), Validation { valid: true, errors: FieldErrors::default() });

        let sink = RecordingSink::default();
        let outcome = state.submit(&sink);
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(Acknowledgement {
                message: "Form submitted!".to_string()
            })
        );
        assert_eq!(*sink.received.borrow(), vec![jane()]);
    }

    #[test]
    fn invalid_submission_never_reaches_sink() {
        let mut state = ContactFormState::default();
        state.fields = jane();
        state.fields.consent = false;

        let sink = RecordingSink::default();
        assert_eq!(state.submit(&sink), SubmitOutcome::Rejected);
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn wrong_value_kind_is_rejected_without_side_effects() {
        let mut state = ContactFormState::default();
        state.submit(&RecordingSink::default());

        let err = state
            .set_field(Field::Consent, FieldValue::Text("yes".to_string()))
            .unwrap_err();
        assert_eq!(err, FormError::ValueKind { field: Field::Consent, kind: "text" });
        assert!(!state.fields.consent);
        assert!(state.errors.contains(Field::Consent));

        let err = state
            .set_field(Field::Email, FieldValue::Checked(true))
            .unwrap_err();
        assert_eq!(err, FormError::ValueKind { field: Field::Email, kind: "checked" });
        assert!(state.errors.contains(Field::Email));
    }

    #[test]
    fn unknown_input_name() {
        let mut state = ContactFormState::default();
        let err = state
            .set_named("time", FieldValue::Text("noon".to_string()))
            .unwrap_err();
        assert_eq!(err, FormError::UnknownField("time".to_string()));
        assert_eq!(state, ContactFormState::default());
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(jane()).unwrap();
        assert_eq!(value["preferredTime"], "mornings");
        assert_eq!(value["consent"], true);
    }
}
