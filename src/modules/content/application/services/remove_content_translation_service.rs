use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    RemoveContentTranslationError, RemoveContentTranslationUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::i18n::LanguageSettings;

pub struct RemoveContentTranslationService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    languages: LanguageSettings,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> RemoveContentTranslationService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    pub fn new(repository: R, languages: LanguageSettings) -> Self {
        Self {
            repository,
            languages,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K, R> RemoveContentTranslationUseCase<K> for RemoveContentTranslationService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        language: &str,
    ) -> Result<ContentRecord<K>, RemoveContentTranslationError> {
        let language = self.languages.resolve(language).ok_or_else(|| {
            RemoveContentTranslationError::LanguageNotSupported(language.to_string())
        })?;

        self.repository
            .remove_translation(id, &language)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => RemoveContentTranslationError::NotFound,
                ContentRepositoryError::TranslationNotFound => {
                    RemoveContentTranslationError::TranslationNotFound
                }
                other => RemoveContentTranslationError::RepositoryError(other.to_string()),
            })
    }
}
