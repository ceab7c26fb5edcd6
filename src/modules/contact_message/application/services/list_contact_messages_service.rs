use async_trait::async_trait;

use crate::modules::contact_message::application::domain::entities::ContactMessage;
use crate::modules::contact_message::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase,
};
use crate::modules::contact_message::application::ports::outgoing::ContactMessageRepository;
use crate::shared::validation::normalize_optional;

pub struct ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ListContactMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        self.repository
            .list(normalize_optional(search))
            .await
            .map_err(|e| ListContactMessagesError::RepositoryError(e.to_string()))
    }
}
