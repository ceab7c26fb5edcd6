use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::config::SubmissionLimits;
use crate::shared::validation::{self, FieldErrors};

pub const NAME_MAX_CHARS: usize = 100;
pub const SUBJECT_MAX_CHARS: usize = 200;
pub const EMAIL_MAX_CHARS: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn label(&self) -> String {
        format!("Message from {}: {}", self.name, self.subject)
    }
}

/// Raw contact form as typed by the visitor.
///
/// `nickname` is the honeypot: hidden from people, filled in by bots.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub nickname: String,
}

impl ContactForm {
    pub fn is_spam(&self) -> bool {
        !self.nickname.trim().is_empty()
    }

    /// Checks the visible fields and returns the row to store.
    pub fn validate(&self, limits: &SubmissionLimits) -> Result<NewContactMessage, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "name", name);
        validation::max_chars(&mut errors, "name", name, NAME_MAX_CHARS);
        validation::required(&mut errors, "email", email);
        validation::max_chars(&mut errors, "email", email, EMAIL_MAX_CHARS);
        validation::email(&mut errors, "email", email);
        validation::max_chars(&mut errors, "subject", subject, SUBJECT_MAX_CHARS);
        validation::required(&mut errors, "message", message);
        validation::max_chars(
            &mut errors,
            "message",
            message,
            limits.contact_message_max_length,
        );

        errors.into_result(NewContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
