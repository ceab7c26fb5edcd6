use async_trait::async_trait;
use std::fmt;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::shared::i18n::Translations;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum CreateContentError {
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for CreateContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateContentError::Validation(errors) => write!(f, "invalid entry: {}", errors),
            CreateContentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateContentUseCase<K: ContentKind>: Send + Sync {
    async fn execute(
        &self,
        data: K,
        translations: Translations<K::Text>,
    ) -> Result<ContentRecord<K>, CreateContentError>;
}
