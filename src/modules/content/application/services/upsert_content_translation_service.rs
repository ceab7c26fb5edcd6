use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    UpsertContentTranslationError, UpsertContentTranslationUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::i18n::LanguageSettings;

pub struct UpsertContentTranslationService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    repository: R,
    languages: LanguageSettings,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> UpsertContentTranslationService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K>,
{
    pub fn new(repository: R, languages: LanguageSettings) -> Self {
        Self {
            repository,
            languages,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K, R> UpsertContentTranslationUseCase<K> for UpsertContentTranslationService<K, R>
where
    K: ContentKind,
    R: ContentRepository<K> + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        language: &str,
        text: K::Text,
    ) -> Result<ContentRecord<K>, UpsertContentTranslationError> {
        let language = self.languages.resolve(language).ok_or_else(|| {
            UpsertContentTranslationError::LanguageNotSupported(language.to_string())
        })?;

        let text = K::normalize_text(text);
        let errors = K::validate_text(&text);
        if !errors.is_empty() {
            return Err(UpsertContentTranslationError::Validation(errors));
        }

        self.repository
            .upsert_translation(id, &language, text)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => UpsertContentTranslationError::NotFound,
                other => UpsertContentTranslationError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::{Education, EducationText};
    use crate::shared::i18n::{LanguageCode, Translations};
    use crate::tests::support::stubs::InMemoryContentRepository;
    use chrono::NaiveDate;

    fn text(degree: &str) -> EducationText {
        EducationText {
            degree: degree.to_string(),
            institution: "Université".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_adds_then_replaces_translation() {
        let repo = InMemoryContentRepository::<Education>::default();
        let created = repo
            .create(
                Education {
                    start_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
                    end_date: None,
                },
                Translations::new(),
            )
            .await
            .unwrap();
        let service = UpsertContentTranslationService::new(repo, LanguageSettings::default());

        service.execute(created.id, "fr", text("Licence")).await.unwrap();
        let record = service.execute(created.id, "fr", text("Master")).await.unwrap();

        let fr = LanguageCode::parse("fr").unwrap();
        assert_eq!(record.translations.len(), 1);
        assert_eq!(record.translations.get(&fr).unwrap().degree, "Master");
    }

    #[tokio::test]
    async fn test_unsupported_language_and_missing_entry() {
        let service = UpsertContentTranslationService::new(
            InMemoryContentRepository::<Education>::default(),
            LanguageSettings::default(),
        );

        let unsupported = service.execute(Uuid::new_v4(), "xx", text("BSc")).await;
        let missing = service.execute(Uuid::new_v4(), "en", text("BSc")).await;

        assert!(matches!(
            unsupported,
            Err(UpsertContentTranslationError::LanguageNotSupported(_))
        ));
        assert!(matches!(missing, Err(UpsertContentTranslationError::NotFound)));
    }
}
