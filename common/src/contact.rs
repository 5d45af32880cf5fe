//! Contact form validation and submission state machine.
//!
//! ```text
//! Editing --submit(valid)--> Submitting --delivered--> Submitted
//!    ^  |                                                  |
//!    |  +--submit(invalid): errors attached                |
//!    +-------------------reset_after_success---------------+
//! ```
//!
//! Validation happens inside `submit`, so it is never an observable phase.
//! There is no transport: delivery is a timed simulation driven by the
//! caller through [`ContactTiming`].

use crate::model::contact::ContactDraft;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    pub submit_delay: Duration,
    pub success_display: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay: SUBMIT_DELAY,
            success_display: SUCCESS_DISPLAY,
        }
    }
}

impl ContactTiming {
    pub fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            success_display: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message should be at least {min} characters long")]
    MessageTooShort { min: usize },
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("the form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form is not accepting submissions")]
    NotEditing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Checks every rule and returns the failures keyed by field. Subject is
/// optional and never fails.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !EMAIL.is_match(email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }

    let message = draft.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(
            Field::Message,
            FieldError::MessageTooShort {
                min: MIN_MESSAGE_LEN,
            },
        );
    }

    errors
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    phase: FormPhase,
}

impl ContactForm {
    /// Empty form, with the subject pre-filled when the visitor arrived from
    /// a service's "Request Service" button.
    pub fn new(selected_service: Option<&str>) -> Self {
        let mut form = Self::default();
        if let Some(service) = selected_service.filter(|s| !s.is_empty()) {
            form.draft.subject = format!("Inquiry about {}", service);
        }
        form
    }

    /// Points an untouched form at another service, updating the pre-filled
    /// subject. Returns false and keeps the form once anything differs from
    /// a fresh form for `previous`.
    pub fn retarget(&mut self, previous: Option<&str>, service: Option<&str>) -> bool {
        if *self != Self::new(previous) {
            return false;
        }
        *self = Self::new(service);
        true
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Email => &self.draft.email,
            Field::Subject => &self.draft.subject,
            Field::Message => &self.draft.message,
        }
    }

    pub fn message_length(&self) -> usize {
        self.draft.message.chars().count()
    }

    /// Updates one field and clears its error. Ignored outside `Editing`.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.phase != FormPhase::Editing {
            return;
        }
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Subject => self.draft.subject = value,
            Field::Message => self.draft.message = value,
        }
        self.errors.remove(&field);
    }

    /// Validates and, when every rule holds, moves to `Submitting` and
    /// returns the accepted draft.
    pub fn submit(&mut self) -> Result<ContactDraft, SubmitError> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitError::InFlight),
            FormPhase::Submitted => return Err(SubmitError::NotEditing),
            FormPhase::Editing => {}
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        self.errors.clear();
        self.phase = FormPhase::Submitting;
        Ok(self.draft.clone())
    }

    /// `Submitting -> Submitted`. Returns false in any other phase.
    pub fn delivered(&mut self) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Submitted;
        true
    }

    /// `Submitted -> Editing` with an empty draft. Returns false in any
    /// other phase.
    pub fn reset_after_success(&mut self) -> bool {
        if self.phase != FormPhase::Submitted {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ImmediateClock, delayed};

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(None);
        form.edit(Field::Name, "Ada Lovelace");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Message, "I would like to talk about a project.");
        form
    }

    #[test]
    fn empty_name_is_reported_and_phase_stays() {
        let mut form = filled();
        form.edit(Field::Name, "   ");
        let err = form.submit().unwrap_err();

        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[&Field::Name].to_string(), "Name is required");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(Field::Name), Some(&FieldError::NameRequired));
    }

    #[test]
    fn malformed_email_is_a_format_error() {
        let mut form = filled();
        form.edit(Field::Email, "ada@example");
        assert!(form.submit().is_err());
        assert_eq!(
            form.error(Field::Email).map(ToString::to_string).as_deref(),
            Some("Please enter a valid email address")
        );

        form.edit(Field::Email, "");
        assert!(form.submit().is_err());
        assert_eq!(form.error(Field::Email), Some(&FieldError::EmailRequired));
    }

    #[test]
    fn short_message_names_the_minimum() {
        let mut form = filled();
        form.edit(Field::Message, "  too short  ");
        assert!(form.submit().is_err());
        assert_eq!(
            form.error(Field::Message).map(ToString::to_string).as_deref(),
            Some("Message should be at least 10 characters long")
        );

        form.edit(Field::Message, "");
        assert!(form.submit().is_err());
        assert_eq!(form.error(Field::Message), Some(&FieldError::MessageRequired));
    }

    #[test]
    fn subject_is_optional() {
        let mut form = filled();
        assert!(form.value(Field::Subject).is_empty());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new(None);
        assert!(form.submit().is_err());
        assert_eq!(form.errors().len(), 3);

        form.edit(Field::Email, "x");
        assert_eq!(form.error(Field::Email), None);
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Message).is_some());
    }

    #[test]
    fn valid_draft_runs_the_full_cycle() {
        let mut form = ContactForm::new(Some("Web Development"));
        assert_eq!(form.value(Field::Subject), "Inquiry about Web Development");
        form.edit(Field::Name, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Message, "Please build me a shop.");

        let draft = form.submit().unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(form.phase(), FormPhase::Submitting);

        assert!(form.delivered());
        assert_eq!(form.phase(), FormPhase::Submitted);

        assert!(form.reset_after_success());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn no_double_submission() {
        let mut form = filled();
        assert!(form.submit().is_ok());
        assert_eq!(form.submit(), Err(SubmitError::InFlight));

        form.delivered();
        assert_eq!(form.submit(), Err(SubmitError::NotEditing));
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = filled();
        form.submit().unwrap();
        form.edit(Field::Name, "Someone else");
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn out_of_order_transitions_are_refused() {
        let mut form = filled();
        assert!(!form.delivered());
        assert!(!form.reset_after_success());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn pristine_form_follows_the_selected_service() {
        let mut form = ContactForm::new(Some("SEO Optimization"));
        assert!(form.retarget(Some("SEO Optimization"), Some("Web Development")));
        assert_eq!(form.value(Field::Subject), "Inquiry about Web Development");

        assert!(form.retarget(Some("Web Development"), None));
        assert_eq!(form.value(Field::Subject), "");
    }

    #[test]
    fn typed_input_survives_a_service_change() {
        let mut form = ContactForm::new(Some("SEO Optimization"));
        form.edit(Field::Name, "Ada");
        assert!(!form.retarget(Some("SEO Optimization"), Some("Web Development")));
        assert_eq!(form.value(Field::Subject), "Inquiry about SEO Optimization");
        assert_eq!(form.value(Field::Name), "Ada");

        let mut submitted = filled();
        submitted.submit().unwrap();
        assert!(!submitted.retarget(None, Some("Web Development")));
        assert_eq!(submitted.phase(), FormPhase::Submitting);
    }

    #[test]
    fn message_length_counts_characters() {
        let mut form = ContactForm::new(None);
        form.edit(Field::Message, "héllo");
        assert_eq!(form.message_length(), 5);
    }

    #[test]
    fn accepted_draft_serializes_for_the_console() {
        let mut form = filled();
        let draft = form.submit().unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn timed_cycle_with_immediate_clock() {
        let timing = ContactTiming::immediate();
        let mut form = filled();
        form.submit().unwrap();

        let (delivery, _guard) = delayed(&ImmediateClock, timing.submit_delay, || ());
        assert!(delivery.await.is_some());
        assert!(form.delivered());

        let (reset, _guard) = delayed(&ImmediateClock, timing.success_display, || ());
        assert!(reset.await.is_some());
        assert!(form.reset_after_success());
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
