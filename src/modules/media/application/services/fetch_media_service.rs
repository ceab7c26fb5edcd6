use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{stored_path, MediaFile};
use crate::modules::media::application::ports::incoming::use_cases::{
    FetchMediaError, FetchMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::MediaStorage;

pub struct FetchMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
}

impl<S> FetchMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> FetchMediaUseCase for FetchMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(&self, category: &str, file: &str) -> Result<MediaFile, FetchMediaError> {
        // Anything that is not a stored name is simply not there.
        let (path, kind) = stored_path(category, file).ok_or(FetchMediaError::NotFound)?;

        let bytes = self
            .storage
            .get(&path)
            .await
            .map_err(|e| FetchMediaError::StorageError(e.to_string()))?
            .ok_or(FetchMediaError::NotFound)?;

        Ok(MediaFile {
            bytes,
            content_type: kind.content_type(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::entities::UploadPolicy;
    use crate::modules::media::application::ports::incoming::use_cases::UploadMediaUseCase;
    use crate::modules::media::application::services::UploadMediaService;
    use crate::tests::support::stubs::InMemoryMediaStorage;

    #[tokio::test]
    async fn test_fetch_returns_uploaded_bytes() {
        let storage = InMemoryMediaStorage::default();
        let gif = b"GIF89a\x01\x00\x01\x00".to_vec();
        let stored = UploadMediaService::new(
            storage.clone(),
            UploadPolicy {
                max_upload_bytes: 1024,
            },
        )
        .execute("hobbies", gif.clone())
        .await
        .unwrap();
        let file = stored.path.trim_start_matches("hobbies/").to_string();

        let fetched = FetchMediaService::new(storage)
            .execute("hobbies", &file)
            .await
            .unwrap();

        assert_eq!(fetched.bytes, gif);
        assert_eq!(fetched.content_type, "image/gif");
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_names_are_not_found() {
        let service = FetchMediaService::new(InMemoryMediaStorage::default());

        assert_eq!(
            service.execute("hobbies", "..%2F..%2Fsecret").await,
            Err(FetchMediaError::NotFound)
        );
        assert_eq!(
            service
                .execute("hobbies", "0123456789abcdef0123456789abcdef.png")
                .await,
            Err(FetchMediaError::NotFound)
        );
    }
}
