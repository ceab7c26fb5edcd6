use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, GetContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;

pub struct GetContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> GetContentService<K, R>
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
impl<K, R> GetContentUseCase<K> for GetContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ContentRecord<K>, GetContentError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetContentError::RepositoryError(e.to_string()))?
            .ok_or(GetContentError::NotFound)
    }
}
