use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::shared::i18n::{LanguageCode, Translations};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Content entry not found")]
    NotFound,

    #[error("Translation not found")]
    TranslationNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage of one content kind together with its translation rows.
#[async_trait]
pub trait ContentRepository<K: ContentKind>: Send + Sync {
    /// In the kind's display order. With `search`, only entries having a
    /// translation that contains it, ignoring case.
    async fn list(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContentRecord<K>>, ContentRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord<K>>, ContentRepositoryError>;

    async fn create(
        &self,
        data: K,
        translations: Translations<K::Text>,
    ) -> Result<ContentRecord<K>, ContentRepositoryError>;

    /// Replaces the universal fields.
    async fn update(&self, id: Uuid, data: K) -> Result<ContentRecord<K>, ContentRepositoryError>;

    async fn upsert_translation(
        &self,
        id: Uuid,
        language: &LanguageCode,
        text: K::Text,
    ) -> Result<ContentRecord<K>, ContentRepositoryError>;

    async fn remove_translation(
        &self,
        id: Uuid,
        language: &LanguageCode,
    ) -> Result<ContentRecord<K>, ContentRepositoryError>;

    /// Translations go with the entry.
    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
