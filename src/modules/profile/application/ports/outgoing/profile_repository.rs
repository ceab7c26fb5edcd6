use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileFields, ProfileText};
use crate::shared::i18n::{LanguageCode, Translations};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("A profile already exists")]
    AlreadyExists,

    #[error("Profile translation not found")]
    TranslationNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the profile, creating the row on first access. `fallback` is
    /// stored for `default_language` whenever that translation is missing.
    async fn load_or_init(
        &self,
        default_language: &LanguageCode,
        fallback: ProfileText,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Fails with `AlreadyExists` when the singleton row is present.
    async fn create(
        &self,
        fields: ProfileFields,
        translations: Translations<ProfileText>,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Replaces the universal fields, creating the row if needed.
    async fn update(&self, fields: ProfileFields) -> Result<Profile, ProfileRepositoryError>;

    async fn upsert_translation(
        &self,
        language: &LanguageCode,
        text: ProfileText,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn remove_translation(
        &self,
        language: &LanguageCode,
    ) -> Result<Profile, ProfileRepositoryError>;
}
