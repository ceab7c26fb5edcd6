use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact_message::application::domain::entities::{
    ContactMessage, NewContactMessage,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    /// Newest first. `search` matches name, email, subject or message,
    /// case-insensitively.
    async fn list(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessage>, ContactMessageRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError>;
}
