use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};

#[derive(Debug, Clone)]
pub enum RemoveContentTranslationError {
    NotFound,
    TranslationNotFound,
    LanguageNotSupported(String),
    RepositoryError(String),
}

impl fmt::Display for RemoveContentTranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveContentTranslationError::NotFound => write!(f, "content entry not found"),
            RemoveContentTranslationError::TranslationNotFound => {
                write!(f, "translation not found")
            }
            RemoveContentTranslationError::LanguageNotSupported(code) => {
                write!(f, "language not supported: {}", code)
            }
            RemoveContentTranslationError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait RemoveContentTranslationUseCase<K: ContentKind>: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        language: &str,
    ) -> Result<ContentRecord<K>, RemoveContentTranslationError>;
}
