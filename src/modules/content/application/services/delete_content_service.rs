use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::ContentKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentError, DeleteContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

pub struct DeleteContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> DeleteContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K, R> DeleteContentUseCase<K> for DeleteContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContentError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ContentRepositoryError::NotFound => DeleteContentError::NotFound,
            other => DeleteContentError::RepositoryError(other.to_string()),
        })?;

        info!(kind = K::KIND, id = %id, "Content entry deleted");
        Ok(())
    }
}
