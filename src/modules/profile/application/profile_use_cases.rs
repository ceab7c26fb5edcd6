use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, LoadProfileUseCase, RemoveProfileTranslationUseCase,
    UpdateProfileUseCase, UpsertProfileTranslationUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;
use crate::modules::profile::application::services::{
    CreateProfileService, LoadProfileService, RemoveProfileTranslationService,
    UpdateProfileService, UpsertProfileTranslationService,
};
use crate::shared::i18n::LanguageSettings;

#[derive(Clone)]
pub struct ProfileUseCases {
    pub load: Arc<dyn LoadProfileUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub upsert_translation: Arc<dyn UpsertProfileTranslationUseCase + Send + Sync>,
    pub remove_translation: Arc<dyn RemoveProfileTranslationUseCase + Send + Sync>,
}

impl ProfileUseCases {
    pub fn new<R>(repository: R, languages: LanguageSettings) -> Self
    where
        R: ProfileRepository + Clone + 'static,
    {
        Self {
            load: Arc::new(LoadProfileService::new(
                repository.clone(),
                languages.clone(),
            )),
            create: Arc::new(CreateProfileService::new(
                repository.clone(),
                languages.clone(),
            )),
            update: Arc::new(UpdateProfileService::new(repository.clone())),
            upsert_translation: Arc::new(UpsertProfileTranslationService::new(
                repository.clone(),
                languages.clone(),
            )),
            remove_translation: Arc::new(RemoveProfileTranslationService::new(
                repository, languages,
            )),
        }
    }
}
