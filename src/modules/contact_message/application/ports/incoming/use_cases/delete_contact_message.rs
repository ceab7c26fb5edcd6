use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum DeleteContactMessageError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteContactMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteContactMessageError::NotFound => write!(f, "contact message not found"),
            DeleteContactMessageError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactMessageError>;
}
