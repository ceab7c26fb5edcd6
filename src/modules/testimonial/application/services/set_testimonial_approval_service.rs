use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    SetTestimonialApprovalError, SetTestimonialApprovalUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;

pub struct SetTestimonialApprovalService<R>
where
    R: TestimonialRepository,
{
    repository: R,
}

impl<R> SetTestimonialApprovalService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetTestimonialApprovalUseCase for SetTestimonialApprovalService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(
        &self,
        mut ids: Vec<Uuid>,
        approved: bool,
    ) -> Result<u64, SetTestimonialApprovalError> {
        ids.sort();
        ids.dedup();

        if ids.is_empty() {
            return Err(SetTestimonialApprovalError::NoIdsGiven);
        }

        let changed = self
            .repository
            .set_approval(&ids, approved)
            .await
            .map_err(|e| SetTestimonialApprovalError::RepositoryError(e.to_string()))?;

        info!(
            "{} testimonial(s) {}",
            changed,
            if approved { "approved" } else { "rejected" }
        );

        Ok(changed)
    }
}
