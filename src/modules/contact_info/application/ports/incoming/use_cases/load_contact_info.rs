use async_trait::async_trait;
use std::fmt;

use crate::modules::contact_info::application::domain::entities::ContactInfo;

#[derive(Debug, Clone)]
pub enum LoadContactInfoError {
    RepositoryError(String),
}

impl fmt::Display for LoadContactInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadContactInfoError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait LoadContactInfoUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactInfo, LoadContactInfoError>;
}
