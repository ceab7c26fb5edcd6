use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{Submission, SubmissionNotifier};
use crate::modules::email::application::services::notify_in_background;
use crate::modules::testimonial::application::domain::entities::TestimonialForm;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    SubmitTestimonialError, SubmitTestimonialUseCase, TestimonialSubmissionOutcome,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;
use crate::shared::config::SubmissionLimits;

pub struct SubmitTestimonialService<R>
where
    R: TestimonialRepository,
{
    repository: R,
    notifier: Arc<dyn SubmissionNotifier + Send + Sync>,
    limits: SubmissionLimits,
}

impl<R> SubmitTestimonialService<R>
where
    R: TestimonialRepository,
{
    pub fn new(
        repository: R,
        notifier: Arc<dyn SubmissionNotifier + Send + Sync>,
        limits: SubmissionLimits,
    ) -> Self {
        Self {
            repository,
            notifier,
            limits,
        }
    }
}

#[async_trait]
impl<R> SubmitTestimonialUseCase for SubmitTestimonialService<R>
where
    R: TestimonialRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: TestimonialForm,
    ) -> Result<TestimonialSubmissionOutcome, SubmitTestimonialError> {
        let new_testimonial = form
            .validate(&self.limits)
            .map_err(SubmitTestimonialError::Validation)?;

        if form.is_spam() {
            info!("Testimonial form honeypot filled in; submission discarded");
            return Ok(TestimonialSubmissionOutcome::Discarded);
        }

        let stored = self
            .repository
            .create(new_testimonial)
            .await
            .map_err(|e| SubmitTestimonialError::RepositoryError(e.to_string()))?;

        info!(testimonial_id = %stored.id, "Testimonial stored, awaiting approval");
        notify_in_background(
            self.notifier.clone(),
            Submission::Testimonial(stored.clone()),
        );

        Ok(TestimonialSubmissionOutcome::Stored(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::email::adapter::outgoing::LogSubmissionNotifier;
    use crate::modules::testimonial::application::ports::incoming::use_cases::ListApprovedTestimonialsUseCase;
    use crate::modules::testimonial::application::services::ListApprovedTestimonialsService;
    use crate::tests::support::stubs::InMemoryTestimonialRepository;

    fn form() -> TestimonialForm {
        TestimonialForm {
            name: "Sam".to_string(),
            role_company: "CTO, Acme".to_string(),
            quote: "Great to work with.".to_string(),
            nickname: String::new(),
        }
    }

    fn service(repo: InMemoryTestimonialRepository) -> SubmitTestimonialService<InMemoryTestimonialRepository> {
        SubmitTestimonialService::new(
            repo,
            Arc::new(LogSubmissionNotifier),
            SubmissionLimits::default(),
        )
    }

    #[tokio::test]
    async fn test_submission_is_stored_unapproved() {
        let repo = InMemoryTestimonialRepository::default();

        let outcome = service(repo.clone()).execute(form()).await.unwrap();

        match outcome {
            TestimonialSubmissionOutcome::Stored(t) => assert!(!t.is_approved),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_new_testimonial_is_absent_from_public_listing() {
        let repo = InMemoryTestimonialRepository::default();
        service(repo.clone()).execute(form()).await.unwrap();

        let public = ListApprovedTestimonialsService::new(repo)
            .execute()
            .await
            .unwrap();

        assert!(public.is_empty());
    }

    #[tokio::test]
    async fn test_honeypot_discards_submission() {
        let repo = InMemoryTestimonialRepository::default();
        let mut spam = form();
        spam.nickname = "bot".to_string();

        let outcome = service(repo.clone()).execute(spam).await.unwrap();

        assert_eq!(outcome, TestimonialSubmissionOutcome::Discarded);
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected() {
        let repo = InMemoryTestimonialRepository::default();
        let mut invalid = form();
        invalid.quote.clear();

        let err = service(repo.clone()).execute(invalid).await.unwrap_err();

        assert!(matches!(err, SubmitTestimonialError::Validation(e) if e.contains("quote")));
        assert_eq!(repo.count(), 0);
    }
}
