//! Contact form use-case.
//!
//! # Responsibility
//! - Hold the draft message and validate it before submission.
//! - Model the simulated submission: enter `Submitting`, wait for the host's
//!   timer, then acknowledge with a toast and clear the draft.
//!
//! # Invariants
//! - At most one submission is in flight; the button stays disabled meanwhile.
//! - Only the ticket issued by the latest `begin_submit` completes it.
//! - There is no transport; completion always succeeds.

use crate::config::ContactConfig;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const TOAST_TITLE: &str = "Message Sent!";
pub const TOAST_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Parses the form control `name` attribute.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Issued by `begin_submit`; redeemed by `complete_submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: u64,
    pub delay_ms: u32,
}

/// Acknowledgement shown after a completed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    MissingField(ContactField),
    InvalidEmail(String),
    AlreadySubmitting,
    UnknownTicket,
}

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "field `{}` is required", field.as_str()),
            Self::InvalidEmail(value) => write!(f, "email address is invalid: {value}"),
            Self::AlreadySubmitting => write!(f, "a message is already being sent"),
            Self::UnknownTicket => write!(f, "submission ticket is not current"),
        }
    }
}

impl Error for ContactFormError {}

#[derive(Debug, Clone)]
pub struct ContactForm {
    config: ContactConfig,
    draft: ContactDraft,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            draft: ContactDraft::default(),
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.draft.name = value,
            ContactField::Email => self.draft.email = value,
            ContactField::Message => self.draft.message = value,
        }
    }

    /// Validates required fields and the email shape.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        for (field, value) in [
            (ContactField::Name, &self.draft.name),
            (ContactField::Email, &self.draft.email),
            (ContactField::Message, &self.draft.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactFormError::MissingField(field));
            }
        }
        let email = self.draft.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ContactFormError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// Starts a simulated submission.
    ///
    /// # Errors
    /// - `AlreadySubmitting` while another submission is in flight.
    /// - `MissingField` / `InvalidEmail` when the draft does not validate.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, ContactFormError> {
        if self.in_flight.is_some() {
            return Err(ContactFormError::AlreadySubmitting);
        }
        self.validate()?;

        let ticket = SubmissionTicket {
            id: self.next_ticket,
            delay_ms: self.config.simulated_delay_ms,
        };
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        info!(
            "event=contact_submit module=contact status=ok phase=begin message_chars={}",
            self.draft.message.chars().count()
        );
        Ok(ticket)
    }

    /// Completes the in-flight submission, clearing the draft.
    pub fn complete_submit(&mut self, ticket: SubmissionTicket) -> Result<Toast, ContactFormError> {
        if self.in_flight != Some(ticket) {
            return Err(ContactFormError::UnknownTicket);
        }
        self.in_flight = None;
        self.draft = ContactDraft::default();
        info!("event=contact_submit module=contact status=ok phase=complete");
        Ok(Toast {
            title: TOAST_TITLE.to_string(),
            description: TOAST_DESCRIPTION.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactField, ContactForm, ContactFormError};
    use crate::config::ContactConfig;

    #[test]
    fn field_names_round_trip_through_parse() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(ContactField::parse(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::parse("phone"), None);
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut form = ContactForm::new(ContactConfig::default());
        form.set_field(ContactField::Name, "Ada");
        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingField(ContactField::Email))
        );
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let mut form = ContactForm::new(ContactConfig::default());
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example");
        form.set_field(ContactField::Message, "hello");
        assert_eq!(
            form.validate(),
            Err(ContactFormError::InvalidEmail("ada@example".to_string()))
        );

        form.set_field(ContactField::Email, " ada@example.com ");
        assert_eq!(form.validate(), Ok(()));
    }
}
