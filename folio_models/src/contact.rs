use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A message submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Check that all fields are present and that the email address has a
    /// `local@domain.tld` shape.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactValidationError::MissingFields);
        }

        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Lifecycle of a contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub const UNEXPECTED_ERROR: &'static str = "An unexpected error occurred. Please try again.";

    /// Whether this status ends a submission.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }
}

impl From<ContactValidationError> for SubmissionStatus {
    fn from(value: ContactValidationError) -> Self {
        Self::Error(value.to_string())
    }
}

impl From<RelayResponse> for SubmissionStatus {
    fn from(value: RelayResponse) -> Self {
        if value.success {
            Self::Success(value.message)
        } else {
            Self::Error(value.message)
        }
    }
}

/// Result of handing a submission to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    pub const SENT: &'static str = "Email sent successfully!";
    pub const FAILED: &'static str = "Failed to send email. Please try again later.";

    pub fn sent() -> Self {
        Self {
            success: true,
            message: Self::SENT.into(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: Self::FAILED.into(),
        }
    }

    pub fn rejected(err: ContactValidationError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}
