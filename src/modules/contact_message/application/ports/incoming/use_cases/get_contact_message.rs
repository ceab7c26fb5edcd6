use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::contact_message::application::domain::entities::ContactMessage;

#[derive(Debug, Clone)]
pub enum GetContactMessageError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetContactMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetContactMessageError::NotFound => write!(f, "contact message not found"),
            GetContactMessageError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ContactMessage, GetContactMessageError>;
}
