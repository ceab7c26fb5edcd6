use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub enum CountPendingTestimonialsError {
    RepositoryError(String),
}

impl fmt::Display for CountPendingTestimonialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountPendingTestimonialsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CountPendingTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, CountPendingTestimonialsError>;
}
