use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum UpsertContentTranslationError {
    NotFound,
    LanguageNotSupported(String),
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for UpsertContentTranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertContentTranslationError::NotFound => write!(f, "content entry not found"),
            UpsertContentTranslationError::LanguageNotSupported(code) => {
                write!(f, "language not supported: {}", code)
            }
            UpsertContentTranslationError::Validation(errors) => {
                write!(f, "invalid translation: {}", errors)
            }
            UpsertContentTranslationError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertContentTranslationUseCase<K: ContentKind>: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        language: &str,
        text: K::Text,
    ) -> Result<ContentRecord<K>, UpsertContentTranslationError>;
}
