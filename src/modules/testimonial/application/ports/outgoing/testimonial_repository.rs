use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::application::domain::entities::{NewTestimonial, Testimonial};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Stores the testimonial unapproved.
    async fn create(&self, data: NewTestimonial) -> Result<Testimonial, TestimonialRepositoryError>;

    /// Newest first, optionally restricted to one approval state and to
    /// entries whose name, role or quote contains `search`.
    async fn list(
        &self,
        approved: Option<bool>,
        search: Option<String>,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError>;

    /// Returns how many rows were changed. Unknown ids are ignored.
    async fn set_approval(
        &self,
        ids: &[Uuid],
        approved: bool,
    ) -> Result<u64, TestimonialRepositoryError>;

    async fn count_pending(&self) -> Result<u64, TestimonialRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError>;
}
