use async_trait::async_trait;
use std::fmt;

use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum UpdateContactInfoError {
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for UpdateContactInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateContactInfoError::Validation(errors) => {
                write!(f, "invalid contact info: {}", errors)
            }
            UpdateContactInfoError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateContactInfoUseCase: Send + Sync {
    async fn execute(&self, info: ContactInfo) -> Result<ContactInfo, UpdateContactInfoError>;
}
