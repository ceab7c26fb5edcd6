use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    DeleteTestimonialError, DeleteTestimonialUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};

pub struct DeleteTestimonialService<R>
where
    R: TestimonialRepository,
{
    repository: R,
}

impl<R> DeleteTestimonialService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTestimonialUseCase for DeleteTestimonialService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteTestimonialError> {
        self.repository.delete(id).await.map_err(|e| match e {
            TestimonialRepositoryError::NotFound => DeleteTestimonialError::NotFound,
            TestimonialRepositoryError::DatabaseError(msg) => {
                DeleteTestimonialError::RepositoryError(msg)
            }
        })
    }
}
