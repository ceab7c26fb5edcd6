use async_trait::async_trait;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CountPendingTestimonialsError, CountPendingTestimonialsUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;

pub struct CountPendingTestimonialsService<R>
where
    R: TestimonialRepository,
{
    repository: R,
}

impl<R> CountPendingTestimonialsService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CountPendingTestimonialsUseCase for CountPendingTestimonialsService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(&self) -> Result<u64, CountPendingTestimonialsError> {
        self.repository
            .count_pending()
            .await
            .map_err(|e| CountPendingTestimonialsError::RepositoryError(e.to_string()))
    }
}
