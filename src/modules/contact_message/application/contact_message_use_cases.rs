use std::sync::Arc;

use crate::modules::contact_message::application::ports::incoming::use_cases::{
    DeleteContactMessageUseCase, GetContactMessageUseCase, ListContactMessagesUseCase,
    SubmitContactMessageUseCase,
};
use crate::modules::contact_message::application::ports::outgoing::ContactMessageRepository;
use crate::modules::contact_message::application::services::{
    DeleteContactMessageService, GetContactMessageService, ListContactMessagesService,
    SubmitContactMessageService,
};
use crate::modules::email::application::ports::outgoing::SubmissionNotifier;
use crate::shared::config::SubmissionLimits;

#[derive(Clone)]
pub struct ContactMessageUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    pub get: Arc<dyn GetContactMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactMessageUseCase + Send + Sync>,
}

impl ContactMessageUseCases {
    pub fn new<R>(
        repository: R,
        notifier: Arc<dyn SubmissionNotifier + Send + Sync>,
        limits: SubmissionLimits,
    ) -> Self
    where
        R: ContactMessageRepository + Clone + 'static,
    {
        Self {
            submit: Arc::new(SubmitContactMessageService::new(
                repository.clone(),
                notifier,
                limits,
            )),
            list: Arc::new(ListContactMessagesService::new(repository.clone())),
            get: Arc::new(GetContactMessageService::new(repository.clone())),
            delete: Arc::new(DeleteContactMessageService::new(repository)),
        }
    }
}
