use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::Profile;

#[derive(Debug, Clone)]
pub enum RemoveProfileTranslationError {
    LanguageNotSupported(String),
    TranslationNotFound,
    RepositoryError(String),
}

impl fmt::Display for RemoveProfileTranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveProfileTranslationError::LanguageNotSupported(code) => {
                write!(f, "language not supported: {}", code)
            }
            RemoveProfileTranslationError::TranslationNotFound => {
                write!(f, "profile translation not found")
            }
            RemoveProfileTranslationError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait RemoveProfileTranslationUseCase: Send + Sync {
    async fn execute(&self, language: &str) -> Result<Profile, RemoveProfileTranslationError>;
}
