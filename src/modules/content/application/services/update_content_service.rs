use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    UpdateContentError, UpdateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

pub struct UpdateContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> UpdateContentService<K, R>
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
impl<K, R> UpdateContentUseCase<K> for UpdateContentService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: K) -> Result<ContentRecord<K>, UpdateContentError> {
        let data = data.normalized();
        let errors = data.validate();
        if !errors.is_empty() {
            return Err(UpdateContentError::Validation(errors));
        }

        self.repository
            .update(id, data)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => UpdateContentError::NotFound,
                other => UpdateContentError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::Skill;
    use crate::shared::i18n::Translations;
    use crate::tests::support::stubs::InMemoryContentRepository;

    #[tokio::test]
    async fn test_update_replaces_universal_fields() {
        let repo = InMemoryContentRepository::<Skill>::default();
        let created = repo
            .create(Skill { proficiency: 10 }, Translations::new())
            .await
            .unwrap();
        let service = UpdateContentService::new(repo);

        let updated = service
            .execute(created.id, Skill { proficiency: 90 })
            .await
            .unwrap();

        assert_eq!(updated.data.proficiency, 90);
    }

    #[tokio::test]
    async fn test_update_validates_and_reports_missing() {
        let service = UpdateContentService::new(InMemoryContentRepository::<Skill>::default());

        let invalid = service.execute(Uuid::new_v4(), Skill { proficiency: 0 }).await;
        let missing = service.execute(Uuid::new_v4(), Skill { proficiency: 50 }).await;

        assert!(matches!(invalid, Err(UpdateContentError::Validation(_))));
        assert!(matches!(missing, Err(UpdateContentError::NotFound)));
    }
}
