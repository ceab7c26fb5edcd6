use async_trait::async_trait;
use std::fmt;

use crate::modules::contact_message::application::domain::entities::{ContactForm, ContactMessage};
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SubmitContactMessageError {
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for SubmitContactMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitContactMessageError::Validation(errors) => {
                write!(f, "invalid contact form: {}", errors)
            }
            SubmitContactMessageError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSubmissionOutcome {
    Stored(ContactMessage),
    /// Honeypot was filled in; nothing was stored.
    Discarded,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        form: ContactForm,
    ) -> Result<ContactSubmissionOutcome, SubmitContactMessageError>;
}
