use async_trait::async_trait;
use std::fmt;

use crate::modules::contact_message::application::domain::entities::ContactMessage;

#[derive(Debug, Clone)]
pub enum ListContactMessagesError {
    RepositoryError(String),
}

impl fmt::Display for ListContactMessagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListContactMessagesError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContactMessage>, ListContactMessagesError>;
}
