use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};

#[derive(Debug, Clone)]
pub enum GetContentError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetContentError::NotFound => write!(f, "content entry not found"),
            GetContentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetContentUseCase<K: ContentKind>: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ContentRecord<K>, GetContentError>;
}
