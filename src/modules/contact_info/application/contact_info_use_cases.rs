use std::sync::Arc;

use crate::modules::contact_info::application::ports::incoming::use_cases::{
    CreateContactInfoUseCase, LoadContactInfoUseCase, UpdateContactInfoUseCase,
};
use crate::modules::contact_info::application::ports::outgoing::ContactInfoRepository;
use crate::modules::contact_info::application::services::{
    CreateContactInfoService, LoadContactInfoService, UpdateContactInfoService,
};

#[derive(Clone)]
pub struct ContactInfoUseCases {
    pub load: Arc<dyn LoadContactInfoUseCase + Send + Sync>,
    pub create: Arc<dyn CreateContactInfoUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateContactInfoUseCase + Send + Sync>,
}

impl ContactInfoUseCases {
    pub fn new<R>(repository: R) -> Self
    where
        R: ContactInfoRepository + Clone + 'static,
    {
        Self {
            load: Arc::new(LoadContactInfoService::new(repository.clone())),
            create: Arc::new(CreateContactInfoService::new(repository.clone())),
            update: Arc::new(UpdateContactInfoService::new(repository)),
        }
    }
}
