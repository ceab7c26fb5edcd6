use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::ContentKind;

#[derive(Debug, Clone)]
pub enum DeleteContentError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteContentError::NotFound => write!(f, "content entry not found"),
            DeleteContentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteContentUseCase<K: ContentKind>: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContentError>;
}
