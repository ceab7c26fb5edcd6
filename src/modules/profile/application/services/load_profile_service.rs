use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileText};
use crate::modules::profile::application::ports::incoming::use_cases::{
    LoadProfileError, LoadProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::i18n::LanguageSettings;

pub struct LoadProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    languages: LanguageSettings,
}

impl<R> LoadProfileService<R>
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
impl<R> LoadProfileUseCase for LoadProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, LoadProfileError> {
        self.repository
            .load_or_init(self.languages.default_language(), ProfileText::placeholder())
            .await
            .map_err(|e| LoadProfileError::RepositoryError(e.to_string()))
    }
}
