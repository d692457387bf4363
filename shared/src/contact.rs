use std::collections::BTreeMap;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::validation::{validate_email, validate_message, validate_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    #[default]
    WebDevelopment,
    MobileApp,
    UiUxDesign,
    Consultation,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::WebDevelopment,
        ServiceCategory::MobileApp,
        ServiceCategory::UiUxDesign,
        ServiceCategory::Consultation,
        ServiceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::MobileApp => "mobile-app",
            Self::UiUxDesign => "ui-ux-design",
            Self::Consultation => "consultation",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileApp => "Mobile App Development",
            Self::UiUxDesign => "UI/UX Design",
            Self::Consultation => "Consultation",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
    Service,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Service => "service",
        }
    }
}

impl FromStr for ContactField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Name, Self::Email, Self::Message, Self::Service]
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or(())
    }
}

/// Also the JSON body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ContactFormData {
    #[validate(custom = "validate_name")]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_message")]
    pub message: String,
    pub service: ServiceCategory,
}

impl ContactFormData {
    /// Copy with surrounding whitespace removed from the free-text fields.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            service: self.service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form endpoint unreachable: {0}")]
    Network(String),
    #[error("form endpoint rejected the message with status {status}")]
    Rejected { status: u16 },
    #[error("could not encode the message: {0}")]
    Encode(String),
}

/// Delivers a contact message to whatever handles it downstream.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, form: &ContactFormData) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmitError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form has invalid fields")]
    Invalid,
}

/// A validated snapshot handed to the submitter, tagged with its attempt number.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub attempt: u64,
    pub data: ContactFormData,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    data: ContactFormData,
    status: SubmitStatus,
    errors: BTreeMap<ContactField, String>,
    attempt: u64,
}

impl ContactForm {
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn update(&mut self, field: ContactField, value: &str) {
        match field {
            ContactField::Name => self.data.name = value.to_string(),
            ContactField::Email => self.data.email = value.to_string(),
            ContactField::Message => self.data.message = value.to_string(),
            ContactField::Service => match value.parse() {
                Ok(service) => self.data.service = service,
                Err(()) => {
                    log::warn!("ignoring unknown service category `{}`", value);
                    return;
                }
            },
        }
        self.errors.remove(&field);
    }

    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if let Err(errors) = self.data.validate() {
            self.errors = field_messages(&errors);
            return Err(SubmitRejected::Invalid);
        }

        self.errors.clear();
        self.attempt += 1;
        self.status = SubmitStatus::Submitting;
        Ok(Submission {
            attempt: self.attempt,
            data: self.data.trimmed(),
        })
    }

    /// Success clears every field; failure keeps them so the visitor can retry.
    pub fn finish_submit(&mut self, attempt: u64, result: Result<(), SubmitError>) {
        if attempt != self.attempt {
            log::debug!("dropping result of stale submission #{}", attempt);
            return;
        }
        self.status = match result {
            Ok(()) => {
                self.data = ContactFormData::default();
                SubmitStatus::Success
            }
            Err(err) => {
                log::warn!("contact submission #{} failed: {}", attempt, err);
                SubmitStatus::Error(err)
            }
        };
    }

    /// Clears the result banner, but only the one produced by `attempt`.
    pub fn dismiss_status(&mut self, attempt: u64) {
        if attempt == self.attempt && matches!(self.status, SubmitStatus::Success | SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}

fn field_messages(errors: &ValidationErrors) -> BTreeMap<ContactField, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let field = field.parse::<ContactField>().ok()?;
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((field, message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INVALID_EMAIL_ERROR, MESSAGE_REQUIRED_ERROR};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeSubmitter {
        outcome: Result<(), SubmitError>,
        received: RefCell<Vec<ContactFormData>>,
    }

    impl FakeSubmitter {
        fn returning(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for FakeSubmitter {
        async fn submit(&self, form: &ContactFormData) -> Result<(), SubmitError> {
            self.received.borrow_mut().push(form.clone());
            self.outcome.clone()
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Priya Shah");
        form.update(ContactField::Email, "priya@example.com");
        form.update(ContactField::Message, "We need a bakery website with online orders.");
        form.update(ContactField::Service, "ui-ux-design");
        form
    }

    fn run(form: &mut ContactForm, submitter: &FakeSubmitter) -> u64 {
        let submission = form.begin_submit().unwrap();
        assert_eq!(form.status(), &SubmitStatus::Submitting);
        let result = block_on(submitter.submit(&submission.data));
        form.finish_submit(submission.attempt, result);
        submission.attempt
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let mut form = filled_form();
        assert_eq!(form.status(), &SubmitStatus::Idle);

        let submitter = FakeSubmitter::returning(Ok(()));
        run(&mut form, &submitter);

        assert_eq!(form.status(), &SubmitStatus::Success);
        assert_eq!(form.data(), &ContactFormData::default());
        assert_eq!(submitter.received.borrow()[0].service, ServiceCategory::UiUxDesign);
    }

    #[test]
    fn test_failed_submit_preserves_fields() {
        let mut form = filled_form();
        let before = form.data().clone();

        let submitter = FakeSubmitter::returning(Err(SubmitError::Network("offline".into())));
        run(&mut form, &submitter);

        assert!(matches!(form.status(), SubmitStatus::Error(SubmitError::Network(_))));
        assert_eq!(form.data(), &before);
    }

    #[test]
    fn test_status_auto_dismisses() {
        let mut form = filled_form();
        let attempt = run(&mut form, &FakeSubmitter::returning(Ok(())));

        form.dismiss_status(attempt);
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_stale_dismiss_leaves_newer_result() {
        let mut form = filled_form();
        let first = run(&mut form, &FakeSubmitter::returning(Err(SubmitError::Rejected { status: 502 })));

        run(&mut form, &FakeSubmitter::returning(Ok(())));
        form.dismiss_status(first);
        assert_eq!(form.status(), &SubmitStatus::Success);
    }

    #[test]
    fn test_submission_posts_trimmed_text() {
        let mut form = filled_form();
        form.update(ContactField::Name, "  Priya Shah ");
        form.update(ContactField::Email, " priya@example.com\t");
        form.update(ContactField::Message, "\nOnline orders please.  ");

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.data.name, "Priya Shah");
        assert_eq!(submission.data.email, "priya@example.com");
        assert_eq!(submission.data.message, "Online orders please.");
        assert_eq!(submission.data.service, ServiceCategory::UiUxDesign);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_invalid_form_reports_field_errors() {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Sam");
        form.update(ContactField::Email, "sam-at-example");

        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.field_error(ContactField::Name), None);
        assert_eq!(form.field_error(ContactField::Email), Some(INVALID_EMAIL_ERROR));
        assert_eq!(form.field_error(ContactField::Message), Some(MESSAGE_REQUIRED_ERROR));

        form.update(ContactField::Message, "A portfolio site");
        assert_eq!(form.field_error(ContactField::Message), None);
    }

    #[test]
    fn test_service_is_optional_and_defaults() {
        let mut form = filled_form();
        form.update(ContactField::Service, "spaceships");
        assert_eq!(form.data().service, ServiceCategory::UiUxDesign);
        assert_eq!(ContactFormData::default().service, ServiceCategory::WebDevelopment);
    }

    #[test]
    fn test_payload_uses_kebab_case_service() {
        let json = serde_json::to_value(filled_form().data()).unwrap();
        assert_eq!(json["service"], "ui-ux-design");
        assert_eq!(json["email"], "priya@example.com");
    }
}
