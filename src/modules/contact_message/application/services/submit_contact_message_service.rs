use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::contact_message::application::domain::entities::ContactForm;
use crate::modules::contact_message::application::ports::incoming::use_cases::{
    ContactSubmissionOutcome, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact_message::application::ports::outgoing::ContactMessageRepository;
use crate::modules::email::application::ports::outgoing::{Submission, SubmissionNotifier};
use crate::modules::email::application::services::notify_in_background;
use crate::shared::config::SubmissionLimits;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
    notifier: Arc<dyn SubmissionNotifier + Send + Sync>,
    limits: SubmissionLimits,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
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
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: ContactForm,
    ) -> Result<ContactSubmissionOutcome, SubmitContactMessageError> {
        let new_message = form
            .validate(&self.limits)
            .map_err(SubmitContactMessageError::Validation)?;

        if form.is_spam() {
            info!("Contact form honeypot filled in; submission discarded");
            return Ok(ContactSubmissionOutcome::Discarded);
        }

        let stored = self
            .repository
            .create(new_message)
            .await
            .map_err(|e| SubmitContactMessageError::RepositoryError(e.to_string()))?;

        info!(message_id = %stored.id, "Contact message stored");
        notify_in_background(
            self.notifier.clone(),
            Submission::ContactMessage(stored.clone()),
        );

        Ok(ContactSubmissionOutcome::Stored(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_message::application::ports::outgoing::ContactMessageRepositoryError;
    use crate::modules::email::application::ports::outgoing::SubmissionNotificationError;
    use crate::tests::support::stubs::InMemoryContactMessageRepository;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct SignalNotifier {
        notify: Arc<Notify>,
        fail: bool,
    }

    #[async_trait]
    impl SubmissionNotifier for SignalNotifier {
        async fn notify(&self, _: &Submission) -> Result<(), SubmissionNotificationError> {
            self.notify.notify_one();
            if self.fail {
                Err(SubmissionNotificationError::EmailSendingFailed(
                    "SMTP down".to_string(),
                ))
            } else {
                Ok(())
            }
        }
    }

    fn notifier(fail: bool) -> (Arc<SignalNotifier>, Arc<Notify>) {
        let notify = Arc::new(Notify::new());
        (
            Arc::new(SignalNotifier {
                notify: notify.clone(),
                fail,
            }),
            notify,
        )
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
            nickname: String::new(),
        }
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_valid_submission_is_stored_and_notified() {
        let repo = InMemoryContactMessageRepository::default();
        let (notifier, notify) = notifier(false);
        let service =
            SubmitContactMessageService::new(repo.clone(), notifier, SubmissionLimits::default());

        let outcome = service.execute(form()).await.unwrap();

        assert!(matches!(outcome, ContactSubmissionOutcome::Stored(m) if m.name == "Jane"));
        assert_eq!(repo.count(), 1);
        tokio::time::timeout(Duration::from_secs(1), notify.notified())
            .await
            .expect("owner was not notified");
    }

    #[tokio::test]
    async fn test_notification_failure_keeps_the_row() {
        let repo = InMemoryContactMessageRepository::default();
        let (notifier, _) = notifier(true);
        let service =
            SubmitContactMessageService::new(repo.clone(), notifier, SubmissionLimits::default());

        let outcome = service.execute(form()).await;

        assert!(matches!(outcome, Ok(ContactSubmissionOutcome::Stored(_))));
        assert_eq!(repo.count(), 1);
    }

    // =====================================================
    // Rejections
    // =====================================================

    #[tokio::test]
    async fn test_honeypot_never_creates_a_row() {
        let repo = InMemoryContactMessageRepository::default();
        let (notifier, _) = notifier(false);
        let service =
            SubmitContactMessageService::new(repo.clone(), notifier, SubmissionLimits::default());
        let mut spam = form();
        spam.nickname = "i-am-a-bot".to_string();

        let outcome = service.execute(spam).await.unwrap();

        assert_eq!(outcome, ContactSubmissionOutcome::Discarded);
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_message_over_limit_is_rejected_without_row() {
        let repo = InMemoryContactMessageRepository::default();
        let (notifier, _) = notifier(false);
        let limits = SubmissionLimits {
            contact_message_max_length: 20,
            ..SubmissionLimits::default()
        };
        let service = SubmitContactMessageService::new(repo.clone(), notifier, limits);
        let mut long = form();
        long.message = "x".repeat(21);

        let err = service.execute(long).await.unwrap_err();

        assert!(matches!(err, SubmitContactMessageError::Validation(e) if e.contains("message")));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_repository_error_is_mapped() {
        let repo = InMemoryContactMessageRepository::default().failing_with(
            ContactMessageRepositoryError::DatabaseError("db down".to_string()),
        );
        let (notifier, _) = notifier(false);
        let service = SubmitContactMessageService::new(repo, notifier, SubmissionLimits::default());

        let err = service.execute(form()).await.unwrap_err();

        assert!(matches!(
            err,
            SubmitContactMessageError::RepositoryError(msg) if msg.contains("db down")
        ));
    }
}
