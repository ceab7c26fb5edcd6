use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact_message::application::domain::entities::ContactMessage;
use crate::modules::contact_message::application::ports::incoming::use_cases::{
    GetContactMessageError, GetContactMessageUseCase,
};
use crate::modules::contact_message::application::ports::outgoing::ContactMessageRepository;

pub struct GetContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> GetContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetContactMessageUseCase for GetContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ContactMessage, GetContactMessageError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetContactMessageError::RepositoryError(e.to_string()))?
            .ok_or(GetContactMessageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_message::application::domain::entities::NewContactMessage;
    use crate::tests::support::stubs::InMemoryContactMessageRepository;

    #[tokio::test]
    async fn test_get_existing_message() {
        let repo = InMemoryContactMessageRepository::default();
        let stored = repo
            .create(NewContactMessage {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                subject: String::new(),
                message: "Body".to_string(),
            })
            .await
            .unwrap();
        let service = GetContactMessageService::new(repo);

        let found = service.execute(stored.id).await.unwrap();

        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_get_missing_message() {
        let service = GetContactMessageService::new(InMemoryContactMessageRepository::default());

        let err = service.execute(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, GetContactMessageError::NotFound));
    }
}
