use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateContentError, CreateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::shared::i18n::{LanguageSettings, Translations};

pub struct CreateContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    languages: LanguageSettings,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> CreateContentService<K, R>
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
impl<K, R> CreateContentUseCase<K> for CreateContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(
        &self,
        data: K,
        translations: Translations<K::Text>,
    ) -> Result<ContentRecord<K>, CreateContentError> {
        let data = data.normalized();
        let translations: Translations<K::Text> = translations
            .into_iter()
            .map(|(language, text)| (language, K::normalize_text(text)))
            .collect();

        let mut errors = data.validate();
        errors.extend(translations.validate(&self.languages, K::validate_text));
        if !errors.is_empty() {
            return Err(CreateContentError::Validation(errors));
        }

        let record = self
            .repository
            .create(data, translations)
            .await
            .map_err(|e| CreateContentError::RepositoryError(e.to_string()))?;

        info!(kind = K::KIND, id = %record.id, "Content entry created");
        Ok(record)
    }
}
