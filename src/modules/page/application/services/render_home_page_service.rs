use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::contact_info::application::ports::incoming::use_cases::LoadContactInfoUseCase;
use crate::modules::content::application::domain::{
    ContentKind, ContentRecord, Education, Experience, Hobby, LocalizedContent, Project, Skill,
};
use crate::modules::content::application::ports::incoming::use_cases::ListContentUseCase;
use crate::modules::page::application::domain::{
    HobbyCard, HomePage, LanguageOption, Notice, PageNotice,
};
use crate::modules::page::application::ports::incoming::use_cases::{
    RenderHomePageError, RenderHomePageUseCase,
};
use crate::modules::profile::application::ports::incoming::use_cases::LoadProfileUseCase;
use crate::modules::testimonial::application::ports::incoming::use_cases::ListApprovedTestimonialsUseCase;
use crate::shared::i18n::{LanguageCode, LanguageSettings};

/// Read-side use cases the page is assembled from.
#[derive(Clone)]
pub struct PageSources {
    pub profile: Arc<dyn LoadProfileUseCase + Send + Sync>,
    pub contact_info: Arc<dyn LoadContactInfoUseCase + Send + Sync>,
    pub skills: Arc<dyn ListContentUseCase<Skill> + Send + Sync>,
    pub projects: Arc<dyn ListContentUseCase<Project> + Send + Sync>,
    pub experiences: Arc<dyn ListContentUseCase<Experience> + Send + Sync>,
    pub educations: Arc<dyn ListContentUseCase<Education> + Send + Sync>,
    pub hobbies: Arc<dyn ListContentUseCase<Hobby> + Send + Sync>,
    pub testimonials: Arc<dyn ListApprovedTestimonialsUseCase + Send + Sync>,
}

pub struct RenderHomePageService {
    sources: PageSources,
    languages: LanguageSettings,
}

impl RenderHomePageService {
    pub fn new(sources: PageSources, languages: LanguageSettings) -> Self {
        Self { sources, languages }
    }
}

#[async_trait]
impl RenderHomePageUseCase for RenderHomePageService {
    async fn execute(
        &self,
        language: &str,
        notice: Option<String>,
    ) -> Result<HomePage, RenderHomePageError> {
        let current = self
            .languages
            .resolve(language)
            .ok_or_else(|| RenderHomePageError::LanguageNotSupported(language.to_string()))?;
        let default = self.languages.default_language();

        let s = &self.sources;
        let (profile, contact_info, skills, projects, experiences, educations, hobbies, testimonials) =
            tokio::try_join!(
                async {
                    s.profile.execute().await.map_err(|e| failed("profile", e))
                },
                async {
                    s.contact_info
                        .execute()
                        .await
                        .map_err(|e| failed("contact info", e))
                },
                list(&s.skills),
                list(&s.projects),
                list(&s.experiences),
                list(&s.educations),
                list(&s.hobbies),
                async {
                    s.testimonials
                        .execute()
                        .await
                        .map_err(|e| failed("testimonials", e))
                },
            )?;

        debug!(language = %current, "Home page assembled");

        Ok(HomePage {
            languages: self
                .languages
                .supported()
                .iter()
                .map(|code| LanguageOption::new(code, &current))
                .collect(),
            profile: profile.localize(&current, default),
            contact_info,
            skills: localize_all(&skills, &current, default),
            projects: localize_all(&projects, &current, default),
            experiences: localize_all(&experiences, &current, default),
            educations: localize_all(&educations, &current, default),
            hobbies: hobbies
                .iter()
                .map(|record| HobbyCard::new(record, &current, default))
                .collect(),
            testimonials,
            notice: notice
                .as_deref()
                .and_then(Notice::parse)
                .map(|n| PageNotice::new(n, &current)),
            language: current,
        })
    }
}

async fn list<K: ContentKind>(
    use_case: &Arc<dyn ListContentUseCase<K> + Send + Sync>,
) -> Result<Vec<ContentRecord<K>>, RenderHomePageError> {
    use_case.execute(None).await.map_err(|e| failed(K::KIND, e))
}

fn localize_all<K: ContentKind>(
    records: &[ContentRecord<K>],
    requested: &LanguageCode,
    default: &LanguageCode,
) -> Vec<LocalizedContent<K>> {
    records
        .iter()
        .map(|record| record.localize(requested, default))
        .collect()
}

fn failed(section: &'static str, e: impl std::fmt::Display) -> RenderHomePageError {
    RenderHomePageError::SectionFailed {
        section,
        message: e.to_string(),
    }
}
