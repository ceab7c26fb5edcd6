use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    RemoveProfileTranslationError, RemoveProfileTranslationUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::i18n::LanguageSettings;

pub struct RemoveProfileTranslationService<R>
where
    R: ProfileRepository,
{
    repository: R,
    languages: LanguageSettings,
}

impl<R> RemoveProfileTranslationService<R>
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
impl<R> RemoveProfileTranslationUseCase for RemoveProfileTranslationService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, language: &str) -> Result<Profile, RemoveProfileTranslationError> {
        let language = self.languages.resolve(language).ok_or_else(|| {
            RemoveProfileTranslationError::LanguageNotSupported(language.to_string())
        })?;

        self.repository
            .remove_translation(&language)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::TranslationNotFound => {
                    RemoveProfileTranslationError::TranslationNotFound
                }
                other => RemoveProfileTranslationError::RepositoryError(other.to_string()),
            })
    }
}
