use std::sync::Arc;

use crate::modules::media::application::domain::entities::UploadPolicy;
use crate::modules::media::application::ports::incoming::use_cases::{
    FetchMediaUseCase, UploadMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::MediaStorage;
use crate::modules::media::application::services::{FetchMediaService, UploadMediaService};

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub fetch: Arc<dyn FetchMediaUseCase + Send + Sync>,
}

impl MediaUseCases {
    pub fn new<S>(storage: S, policy: UploadPolicy) -> Self
    where
        S: MediaStorage + Clone + 'static,
    {
        Self {
            upload: Arc::new(UploadMediaService::new(storage.clone(), policy)),
            fetch: Arc::new(FetchMediaService::new(storage)),
        }
    }
}
