use async_trait::async_trait;
use std::fmt;

use crate::modules::testimonial::application::domain::entities::PublishedTestimonial;

#[derive(Debug, Clone)]
pub enum ListApprovedTestimonialsError {
    RepositoryError(String),
}

impl fmt::Display for ListApprovedTestimonialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListApprovedTestimonialsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait ListApprovedTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PublishedTestimonial>, ListApprovedTestimonialsError>;
}
