use async_trait::async_trait;
use std::fmt;

use crate::modules::testimonial::application::domain::entities::Testimonial;

#[derive(Debug, Clone)]
pub enum ListTestimonialsError {
    RepositoryError(String),
}

impl fmt::Display for ListTestimonialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListTestimonialsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListTestimonialsUseCase: Send + Sync {
    async fn execute(
        &self,
        approved: Option<bool>,
        search: Option<String>,
    ) -> Result<Vec<Testimonial>, ListTestimonialsError>;
}
