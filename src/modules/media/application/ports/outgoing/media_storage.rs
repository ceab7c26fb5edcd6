use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaStorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Byte storage addressed by paths relative to the media root.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Writing a path that already exists leaves the stored file as is.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), MediaStorageError>;

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, MediaStorageError>;
}
