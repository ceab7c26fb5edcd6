use async_trait::async_trait;

use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::contact_info::application::ports::incoming::use_cases::{
    UpdateContactInfoError, UpdateContactInfoUseCase,
};
use crate::modules::contact_info::application::ports::outgoing::ContactInfoRepository;

pub struct UpdateContactInfoService<R>
where
    R: ContactInfoRepository,
{
    repository: R,
}

impl<R> UpdateContactInfoService<R>
where
    R: ContactInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateContactInfoUseCase for UpdateContactInfoService<R>
where
    R: ContactInfoRepository + Send + Sync,
{
    async fn execute(&self, info: ContactInfo) -> Result<ContactInfo, UpdateContactInfoError> {
        let info = info.normalized();
        let errors = info.validate();
        if !errors.is_empty() {
            return Err(UpdateContactInfoError::Validation(errors));
        }

        self.repository
            .update(info)
            .await
            .map_err(|e| UpdateContactInfoError::RepositoryError(e.to_string()))
    }
}
