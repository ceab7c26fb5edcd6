use async_trait::async_trait;

use crate::modules::testimonial::application::domain::entities::PublishedTestimonial;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    ListApprovedTestimonialsError, ListApprovedTestimonialsUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;

pub struct ListApprovedTestimonialsService<R>
where
    R: TestimonialRepository,
{
    repository: R,
}

impl<R> ListApprovedTestimonialsService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListApprovedTestimonialsUseCase for ListApprovedTestimonialsService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PublishedTestimonial>, ListApprovedTestimonialsError> {
        let approved = self
            .repository
            .list(Some(true), None)
            .await
            .map_err(|e| ListApprovedTestimonialsError::RepositoryError(e.to_string()))?;

        Ok(approved
            .into_iter()
            .filter(|t| t.is_approved)
            .map(PublishedTestimonial::from)
            .collect())
    }
}
