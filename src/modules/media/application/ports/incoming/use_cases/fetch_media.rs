use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchMediaError {
    #[error("Media file not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait FetchMediaUseCase: Send + Sync {
    async fn execute(&self, category: &str, file: &str) -> Result<MediaFile, FetchMediaError>;
}
