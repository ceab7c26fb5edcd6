use async_trait::async_trait;
use tracing::error;

use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::contact_info::application::ports::incoming::use_cases::{
    CreateContactInfoError, CreateContactInfoUseCase,
};
use crate::modules::contact_info::application::ports::outgoing::{
    ContactInfoRepository, ContactInfoRepositoryError,
};

pub struct CreateContactInfoService<R>
where
    R: ContactInfoRepository,
{
    repository: R,
}

impl<R> CreateContactInfoService<R>
where
    R: ContactInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateContactInfoUseCase for CreateContactInfoService<R>
where
    R: ContactInfoRepository + Send + Sync,
{
    async fn execute(&self, info: ContactInfo) -> Result<ContactInfo, CreateContactInfoError> {
        let info = info.normalized();
        let errors = info.validate();
        if !errors.is_empty() {
            return Err(CreateContactInfoError::Validation(errors));
        }

        self.repository.create(info).await.map_err(|e| match e {
            ContactInfoRepositoryError::AlreadyExists => {
                error!("Refused to create a second contact info row: singleton already exists");
                CreateContactInfoError::AlreadyExists
            }
            other => CreateContactInfoError::RepositoryError(other.to_string()),
        })
    }
}
