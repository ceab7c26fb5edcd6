use async_trait::async_trait;

use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::contact_info::application::ports::incoming::use_cases::{
    LoadContactInfoError, LoadContactInfoUseCase,
};
use crate::modules::contact_info::application::ports::outgoing::ContactInfoRepository;

pub struct LoadContactInfoService<R>
where
    R: ContactInfoRepository,
{
    repository: R,
}

impl<R> LoadContactInfoService<R>
where
    R: ContactInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> LoadContactInfoUseCase for LoadContactInfoService<R>
where
    R: ContactInfoRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ContactInfo, LoadContactInfoError> {
        self.repository
            .load_or_init(ContactInfo::with_default_email())
            .await
            .map_err(|e| LoadContactInfoError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_info::application::domain::entities::DEFAULT_EMAIL;
    use crate::tests::support::stubs::InMemoryContactInfoRepository;

    #[tokio::test]
    async fn test_first_load_uses_default_email() {
        let service = LoadContactInfoService::new(InMemoryContactInfoRepository::default());

        let info = service.execute().await.unwrap();

        assert_eq!(info.email, DEFAULT_EMAIL);
    }

    #[tokio::test]
    async fn test_empty_email_is_repaired() {
        let repo = InMemoryContactInfoRepository::default().with_row(ContactInfo {
            phone: "+33 1 23".to_string(),
            ..ContactInfo::default()
        });
        let service = LoadContactInfoService::new(repo);

        let info = service.execute().await.unwrap();

        assert_eq!(info.email, DEFAULT_EMAIL);
        assert_eq!(info.phone, "+33 1 23");
    }
}
