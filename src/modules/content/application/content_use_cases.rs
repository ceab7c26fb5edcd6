use std::sync::Arc;

use crate::modules::content::application::domain::ContentKind;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateContentUseCase, DeleteContentUseCase, GetContentUseCase, ListContentUseCase,
    RemoveContentTranslationUseCase, UpdateContentUseCase, UpsertContentTranslationUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::services::{
    CreateContentService, DeleteContentService, GetContentService, ListContentService,
    RemoveContentTranslationService, UpdateContentService, UpsertContentTranslationService,
};
use crate::shared::i18n::LanguageSettings;

/// Use cases of one content kind.
pub struct ContentUseCases<K: ContentKind> {
    pub list: Arc<dyn ListContentUseCase<K> + Send + Sync>,
    pub get: Arc<dyn GetContentUseCase<K> + Send + Sync>,
    pub create: Arc<dyn CreateContentUseCase<K> + Send + Sync>,
    pub update: Arc<dyn UpdateContentUseCase<K> + Send + Sync>,
    pub upsert_translation: Arc<dyn UpsertContentTranslationUseCase<K> + Send + Sync>,
    pub remove_translation: Arc<dyn RemoveContentTranslationUseCase<K> + Send + Sync>,
    pub delete: Arc<dyn DeleteContentUseCase<K> + Send + Sync>,
}

impl<K: ContentKind> ContentUseCases<K> {
    /// Wires every service of the kind over one repository.
    pub fn new<R>(repository: R, languages: LanguageSettings) -> Self
    where
        R: ContentRepository<K> + Clone + 'static,
    {
        Self {
            list: Arc::new(ListContentService::new(repository.clone())),
            get: Arc::new(GetContentService::new(repository.clone())),
            create: Arc::new(CreateContentService::new(
                repository.clone(),
                languages.clone(),
            )),
            update: Arc::new(UpdateContentService::new(repository.clone())),
            upsert_translation: Arc::new(UpsertContentTranslationService::new(
                repository.clone(),
                languages.clone(),
            )),
            remove_translation: Arc::new(RemoveContentTranslationService::new(
                repository.clone(),
                languages,
            )),
            delete: Arc::new(DeleteContentService::new(repository)),
        }
    }
}

impl<K: ContentKind> Clone for ContentUseCases<K> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            get: self.get.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            upsert_translation: self.upsert_translation.clone(),
            remove_translation: self.remove_translation.clone(),
            delete: self.delete.clone(),
        }
    }
}
