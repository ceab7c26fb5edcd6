use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetTestimonialApprovalError {
    NoIdsGiven,
    RepositoryError(String),
}

impl fmt::Display for SetTestimonialApprovalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetTestimonialApprovalError::NoIdsGiven => write!(f, "no testimonial ids given"),
            SetTestimonialApprovalError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

/// Bulk approve (`approved = true`) or reject. Returns the number of
/// testimonials that changed state.
#[async_trait]
pub trait SetTestimonialApprovalUseCase: Send + Sync {
    async fn execute(
        &self,
        ids: Vec<Uuid>,
        approved: bool,
    ) -> Result<u64, SetTestimonialApprovalError>;
}
