use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum UpdateContentError {
    NotFound,
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for UpdateContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateContentError::NotFound => write!(f, "content entry not found"),
            UpdateContentError::Validation(errors) => write!(f, "invalid entry: {}", errors),
            UpdateContentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateContentUseCase<K: ContentKind>: Send + Sync {
    async fn execute(&self, id: Uuid, data: K) -> Result<ContentRecord<K>, UpdateContentError>;
}
