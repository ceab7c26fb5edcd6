use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum DeleteTestimonialError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteTestimonialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteTestimonialError::NotFound => write!(f, "testimonial not found"),
            DeleteTestimonialError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteTestimonialUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteTestimonialError>;
}
