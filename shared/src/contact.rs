//! Contact form validation and submission results.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Minimum message length after trimming, in UTF-16 code units as the
/// browser reports `String.length`.
pub const MIN_MESSAGE_CHARS: usize = 10;
/// Label shown on the submit button while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";
/// Shown after the server accepted the message.
pub const SUCCESS_MESSAGE: &str = "Thanks — your message has been received!";
/// Shown when the server answered with a non-success status.
pub const REJECTED_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";
/// Shown when the request itself failed.
pub const TRANSPORT_MESSAGE: &str = "Failed to send message. Check your connection.";

// Local part, domain and a TLD of at least two letters; ASCII case-insensitive.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// First failing check of a contact form. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name empty after trimming.
    #[error("Please enter your name.")]
    MissingName,
    /// Email empty or malformed.
    #[error("Please enter a valid email.")]
    InvalidEmail,
    /// Message shorter than [`MIN_MESSAGE_CHARS`].
    #[error("Message should be at least 10 characters.")]
    MessageTooShort,
}

/// Permissive email check.
pub fn is_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trimmed form values; also the JSON body of the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Trims each raw field value.
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Runs the checks in order; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.is_empty() || !is_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.encode_utf16().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response.
    Accepted,
    /// Any other HTTP status.
    Rejected {
        /// Status code returned by the server.
        status: u16,
    },
    /// The request never produced a response.
    TransportError(String),
}

impl SubmitOutcome {
    /// Classifies an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected {
                status,
            }
        }
    }

    /// Message shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => SUCCESS_MESSAGE,
            SubmitOutcome::Rejected {
                ..
            } => REJECTED_MESSAGE,
            SubmitOutcome::TransportError(_) => TRANSPORT_MESSAGE,
        }
    }

    /// Only an accepted message clears the fields.
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
        ContactForm::from_raw(name, email, message).validate()
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(check("", "bad", "short"), Err(ValidationError::MissingName));
        assert_eq!(check("   ", "a@b.co", "this is long enough"), Err(ValidationError::MissingName));
        assert_eq!(check("A", "bad", "short"), Err(ValidationError::InvalidEmail));
        assert_eq!(check("A", "", "this is long enough"), Err(ValidationError::InvalidEmail));
        assert_eq!(check("A", "a@b.co", "short"), Err(ValidationError::MessageTooShort));
        assert_eq!(check("A", "a@b.co", "this is long enough"), Ok(()));
    }

    #[test]
    fn messages_match_the_page_copy() {
        assert_eq!(ValidationError::MissingName.to_string(), "Please enter your name.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email.");
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message should be at least 10 characters."
        );
    }

    #[test]
    fn message_length_is_measured_after_trimming() {
        assert_eq!(check("A", "a@b.co", "   123456789   "), Err(ValidationError::MessageTooShort));
        assert_eq!(check("A", "a@b.co", "  1234567890 "), Ok(()));
    }

    #[test]
    fn message_length_counts_utf16_units() {
        // Each emoji is a surrogate pair.
        assert_eq!(check("A", "a@b.co", &"\u{1F600}".repeat(5)), Ok(()));
        assert_eq!(check("A", "a@b.co", &"\u{1F600}".repeat(4)), Err(ValidationError::MessageTooShort));
        assert_eq!(check("A", "a@b.co", "ééééééééé"), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn email_pattern() {
        assert!(is_email("first.last+tag@example.com"));
        assert!(is_email("USER@EXAMPLE.ORG"));
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b.c"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.de"));
        assert!(!is_email("@c.de"));
    }

    #[test]
    fn payload_is_plain_json_object() {
        let form = ContactForm::from_raw(" Ada ", "ada@example.com", " hello there friend ");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "hello there friend",
            })
        );
    }

    #[test]
    fn outcome_classification() {
        assert_eq!(SubmitOutcome::from_status(200), SubmitOutcome::Accepted);
        assert_eq!(SubmitOutcome::from_status(204), SubmitOutcome::Accepted);
        assert_eq!(
            SubmitOutcome::from_status(500),
            SubmitOutcome::Rejected {
                status: 500
            }
        );
        assert!(SubmitOutcome::Accepted.clears_form());
        assert!(!SubmitOutcome::from_status(500).clears_form());
        assert_eq!(SubmitOutcome::from_status(500).user_message(), REJECTED_MESSAGE);
        assert_eq!(
            SubmitOutcome::TransportError("offline".into()).user_message(),
            TRANSPORT_MESSAGE
        );
    }
}
