use async_trait::async_trait;
use std::fmt;

use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub enum CreateContactInfoError {
    AlreadyExists,
    Validation(FieldErrors),
    RepositoryError(String),
}

impl fmt::Display for CreateContactInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateContactInfoError::AlreadyExists => write!(f, "contact info already exists"),
            CreateContactInfoError::Validation(errors) => {
                write!(f, "invalid contact info: {}", errors)
            }
            CreateContactInfoError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CreateContactInfoUseCase: Send + Sync {
    async fn execute(&self, info: ContactInfo) -> Result<ContactInfo, CreateContactInfoError>;
}
