use async_trait::async_trait;
use std::fmt;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};

#[derive(Debug, Clone)]
pub enum ListContentError {
    RepositoryError(String),
}

impl fmt::Display for ListContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListContentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// All entries in display order; `search` keeps entries whose translated
/// fields contain the term in any language.
#[async_trait]
pub trait ListContentUseCase<K: ContentKind>: Send + Sync {
    async fn execute(&self, search: Option<String>)
        -> Result<Vec<ContentRecord<K>>, ListContentError>;
}
