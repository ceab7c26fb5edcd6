use async_trait::async_trait;

use crate::modules::media::application::domain::entities::StoredMedia;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadMediaError {
    #[error("Unknown media category: {0}")]
    UnknownCategory(String),

    #[error("Upload is empty")]
    Empty,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    TooLarge {
        max_bytes: usize,
        actual_bytes: usize,
    },

    #[error("Unsupported file type for {0}")]
    UnsupportedType(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn execute(&self, category: &str, bytes: Vec<u8>)
        -> Result<StoredMedia, UploadMediaError>;
}
