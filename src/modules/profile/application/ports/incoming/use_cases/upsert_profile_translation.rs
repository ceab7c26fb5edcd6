use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::{Profile, ProfileText};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum UpsertProfileTranslationError {
    LanguageNotSupported(String),
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for UpsertProfileTranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertProfileTranslationError::LanguageNotSupported(code) => {
                write!(f, "language not supported: {}", code)
            }
            UpsertProfileTranslationError::Validation(errors) => {
                write!(f, "invalid translation: {}", errors)
            }
            UpsertProfileTranslationError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertProfileTranslationUseCase: Send + Sync {
    /// `language` is the raw path segment; it must name a supported language.
    async fn execute(
        &self,
        language: &str,
        text: ProfileText,
    ) -> Result<Profile, UpsertProfileTranslationError>;
}
