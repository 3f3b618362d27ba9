//! Contact form validation and (simulated) submission.
//!
//! Field rules are evaluated independently so a submission reports every
//! violated field at once, not just the first. Submission only happens on a
//! clean validation pass; the send itself is simulated with a fixed delay and
//! always succeeds unless a failure has been injected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use driftline_core::Email;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// Errors from the (simulated) contact send.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The simulated network call was rejected.
    #[error("contact service is unreachable")]
    Unreachable,
}

/// The form fields the validator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Email => f.write_str("email"),
            Self::Message => f.write_str("message"),
        }
    }
}

/// A failed field rule with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: ContactField,
    pub message: &'static str,
}

/// Contact form data as entered by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Validate every required field, collecting all violations.
    ///
    /// Deliberately not short-circuiting: each invalid field gets its own
    /// message so the page can mark them all at once.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldViolation> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .filter_map(|field| validate_field(field, self.raw_value(field)).err())
            .collect()
    }

    fn raw_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// Validate a single field against the static rule table.
///
/// | field   | rule                                        |
/// |---------|---------------------------------------------|
/// | name    | non-empty, >= 2 characters after trimming   |
/// | email   | plausible `local@domain.tld` shape          |
/// | message | non-empty, >= 10 characters after trimming  |
///
/// # Errors
///
/// Returns the violated rule's user-facing message.
pub fn validate_field(field: ContactField, raw: &str) -> Result<(), FieldViolation> {
    let trimmed = raw.trim();

    let message = match field {
        ContactField::Name if trimmed.is_empty() => "Please enter your name.",
        ContactField::Name if trimmed.chars().count() < MIN_NAME_CHARS => {
            "Name must be at least 2 characters."
        }
        ContactField::Email if trimmed.is_empty() => "Please enter your email address.",
        ContactField::Email if Email::parse(trimmed).is_err() => {
            "Please enter a valid email address."
        }
        ContactField::Message if trimmed.is_empty() => "Please enter a message.",
        ContactField::Message if trimmed.chars().count() < MIN_MESSAGE_CHARS => {
            "Message must be at least 10 characters."
        }
        _ => return Ok(()),
    };

    Err(FieldViolation { field, message })
}

/// Simulated contact-message sender.
#[derive(Debug)]
pub struct ContactClient {
    delay: Duration,
    fail_next: AtomicBool,
}

impl ContactClient {
    /// Create a sender with the configured artificial latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next `send` call fail, once.
    pub fn fail_next_send(&self) {
        self.fail_next.store(true, Ordering::Relaxed);
    }

    /// Send a validated contact message.
    ///
    /// Callers are expected to have run [`ContactForm::validate`] first;
    /// sending does not re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Unreachable`] when a failure has been injected
    /// via [`Self::fail_next_send`].
    pub async fn send(&self, form: &ContactForm) -> Result<(), SendError> {
        tokio::time::sleep(self.delay).await;

        if self.fail_next.swap(false, Ordering::Relaxed) {
            return Err(SendError::Unreachable);
        }

        tracing::info!(email = %form.email.trim(), "contact message sent");
        Ok(())
    }
}
