use async_trait::async_trait;
use tracing::error;

use crate::modules::profile::application::domain::entities::{Profile, ProfileFields, ProfileText};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::i18n::{LanguageSettings, Translations};

pub struct CreateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    languages: LanguageSettings,
}

impl<R> CreateProfileService<R>
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
impl<R> CreateProfileUseCase for CreateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        fields: ProfileFields,
        translations: Translations<ProfileText>,
    ) -> Result<Profile, CreateProfileError> {
        let fields = fields.normalized();
        let translations: Translations<ProfileText> = translations
            .into_iter()
            .map(|(language, text)| (language, text.normalized()))
            .collect();

        let mut errors = fields.validate();
        errors.extend(translations.validate(&self.languages, ProfileText::validate));
        if !errors.is_empty() {
            return Err(CreateProfileError::Validation(errors));
        }

        self.repository
            .create(fields, translations)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::AlreadyExists => {
                    error!("Refused to create a second profile: singleton already exists");
                    CreateProfileError::AlreadyExists
                }
                other => CreateProfileError::RepositoryError(other.to_string()),
            })
    }
}
