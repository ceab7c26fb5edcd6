use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use crate::modules::media::application::ports::outgoing::{MediaStorage, MediaStorageError};

/// Stores media under a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), MediaStorageError> {
        let target = self.root.join(path);
        if fs::try_exists(&target).await.map_err(map_io_err)? {
            debug!(path = %path, "Media file already stored");
            return Ok(());
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(map_io_err)?;
        }

        // Write next to the target, then rename, so readers never see a
        // partial file.
        let partial = target.with_extension("part");
        fs::write(&partial, bytes).await.map_err(map_io_err)?;
        fs::rename(&partial, &target).await.map_err(map_io_err)?;
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, MediaStorageError> {
        match fs::read(self.root.join(path)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_err(e)),
        }
    }
}

fn map_io_err(e: std::io::Error) -> MediaStorageError {
    MediaStorageError::Io(e.to_string())
}
