use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileText};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertProfileTranslationError, UpsertProfileTranslationUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::i18n::LanguageSettings;

pub struct UpsertProfileTranslationService<R>
where
    R: ProfileRepository,
{
    repository: R,
    languages: LanguageSettings,
}

impl<R> UpsertProfileTranslationService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, languages: LanguageSettings) -> Self {
        Self {
            repository,
            languages,
        }
    }
}

#[async_trait]
impl<R> UpsertProfileTranslationUseCase for UpsertProfileTranslationService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        language: &str,
        text: ProfileText,
    ) -> Result<Profile, UpsertProfileTranslationError> {
        let language = self.languages.resolve(language).ok_or_else(|| {
            UpsertProfileTranslationError::LanguageNotSupported(language.to_string())
        })?;

        let text = text.normalized();
        let errors = text.validate();
        if !errors.is_empty() {
            return Err(UpsertProfileTranslationError::Validation(errors));
        }

        self.repository
            .upsert_translation(&language, text)
            .await
            .map_err(|e| UpsertProfileTranslationError::RepositoryError(e.to_string()))
    }
}
