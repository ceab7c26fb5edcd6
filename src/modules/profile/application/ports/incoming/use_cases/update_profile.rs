use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::{Profile, ProfileFields};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileError::Validation(errors) => write!(f, "invalid profile: {}", errors),
            UpdateProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, fields: ProfileFields) -> Result<Profile, UpdateProfileError>;
}
