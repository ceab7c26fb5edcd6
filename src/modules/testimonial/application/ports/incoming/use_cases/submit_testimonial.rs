use async_trait::async_trait;
use std::fmt;

use crate::modules::testimonial::application::domain::entities::{Testimonial, TestimonialForm};
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SubmitTestimonialError {
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for SubmitTestimonialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitTestimonialError::Validation(errors) => {
                write!(f, "invalid testimonial form: {}", errors)
            }
            SubmitTestimonialError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestimonialSubmissionOutcome {
    /// Stored unapproved; hidden from the public page until approved.
    Stored(Testimonial),
    Discarded,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        form: TestimonialForm,
    ) -> Result<TestimonialSubmissionOutcome, SubmitTestimonialError>;
}
