use async_trait::async_trait;
use std::marker::PhantomData;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentError, ListContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::shared::validation::normalize_optional;

pub struct ListContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> ListContentService<K, R>
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
impl<K, R> ListContentUseCase<K> for ListContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContentRecord<K>>, ListContentError> {
        self.repository
            .list(normalize_optional(search))
            .await
            .map_err(|e| ListContentError::RepositoryError(e.to_string()))
    }
}
