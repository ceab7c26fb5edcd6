use async_trait::async_trait;
use tracing::info;

use crate::modules::media::application::domain::entities::{
    media_path, MediaCategory, MediaKind, StoredMedia, UploadPolicy,
};
use crate::modules::media::application::ports::incoming::use_cases::{
    UploadMediaError, UploadMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::MediaStorage;

pub struct UploadMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> UploadMediaUseCase for UploadMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(
        &self,
        category: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredMedia, UploadMediaError> {
        let category = MediaCategory::parse(category)
            .ok_or_else(|| UploadMediaError::UnknownCategory(category.to_string()))?;

        if bytes.is_empty() {
            return Err(UploadMediaError::Empty);
        }
        if bytes.len() > self.policy.max_upload_bytes {
            return Err(UploadMediaError::TooLarge {
                max_bytes: self.policy.max_upload_bytes,
                actual_bytes: bytes.len(),
            });
        }

        let kind = MediaKind::sniff(&bytes)
            .filter(|kind| category.accepts(*kind))
            .ok_or_else(|| UploadMediaError::UnsupportedType(category.to_string()))?;

        let path = media_path(category, &bytes, kind);
        self.storage
            .put(&path, &bytes)
            .await
            .map_err(|e| UploadMediaError::StorageError(e.to_string()))?;

        info!(path = %path, size = bytes.len(), "Media file stored");
        Ok(StoredMedia::new(path, kind, bytes.len()))
    }
}
