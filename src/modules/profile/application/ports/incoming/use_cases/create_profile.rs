use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::{Profile, ProfileFields, ProfileText};
use crate::shared::i18n::Translations;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum CreateProfileError {
    AlreadyExists,
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for CreateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProfileError::AlreadyExists => write!(f, "a profile already exists"),
            CreateProfileError::Validation(errors) => write!(f, "invalid profile: {}", errors),
            CreateProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        fields: ProfileFields,
        translations: Translations<ProfileText>,
    ) -> Result<Profile, CreateProfileError>;
}
