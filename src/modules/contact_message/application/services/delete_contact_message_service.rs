use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact_message::application::ports::incoming::use_cases::{
    DeleteContactMessageError, DeleteContactMessageUseCase,
};
use crate::modules::contact_message::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

pub struct DeleteContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> DeleteContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteContactMessageUseCase for DeleteContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactMessageError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ContactMessageRepositoryError::NotFound => DeleteContactMessageError::NotFound,
            ContactMessageRepositoryError::DatabaseError(msg) => {
                DeleteContactMessageError::RepositoryError(msg)
            }
        })
    }
}
