use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::Profile;

#[derive(Debug, Clone)]
pub enum LoadProfileError {
    RepositoryError(String),
}

impl fmt::Display for LoadProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Always yields a usable profile: the row and its default-language
/// translation are created on first access.
#[async_trait]
pub trait LoadProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, LoadProfileError>;
}
