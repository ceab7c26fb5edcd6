use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::application::use_cases::login_staff::{
    ILoginStaffUseCase, LoginStaffUseCase,
};
use crate::modules::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenUseCase,
};
use crate::modules::auth::application::use_cases::AuthUseCases;
use crate::modules::contact_info::application::contact_info_use_cases::ContactInfoUseCases;
use crate::modules::contact_info::application::ports::incoming::use_cases::{
    CreateContactInfoUseCase, LoadContactInfoUseCase, UpdateContactInfoUseCase,
};
use crate::modules::contact_message::application::contact_message_use_cases::ContactMessageUseCases;
use crate::modules::contact_message::application::ports::incoming::use_cases::{
    DeleteContactMessageUseCase, GetContactMessageUseCase, ListContactMessagesUseCase,
};
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::domain::{
    Education, Experience, Hobby, Project, Skill,
};
use crate::modules::email::adapter::outgoing::LogSubmissionNotifier;
use crate::modules::media::application::domain::entities::UploadPolicy;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::incoming::use_cases::{
    FetchMediaUseCase, UploadMediaUseCase,
};
use crate::modules::page::application::page_use_cases::PageUseCases;
use crate::modules::page::application::ports::incoming::use_cases::{
    RenderHomePageUseCase, SubmitPageFormUseCase,
};
use crate::modules::page::application::services::PageSources;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, LoadProfileUseCase, RemoveProfileTranslationUseCase,
    UpdateProfileUseCase, UpsertProfileTranslationUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CountPendingTestimonialsUseCase, DeleteTestimonialUseCase, ListTestimonialsUseCase,
    SetTestimonialApprovalUseCase,
};
use crate::modules::testimonial::application::testimonial_use_cases::TestimonialUseCases;
use crate::shared::config::{MediaSettings, SubmissionLimits};
use crate::shared::i18n::LanguageSettings;
use crate::tests::support::auth_helper::test_jwt_service;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an [`AppState`] backed by in-memory repositories; tests swap in
/// the use case they exercise.
pub struct TestAppStateBuilder {
    languages: LanguageSettings,
    auth: AuthUseCases,
    profile: ProfileUseCases,
    contact_info: ContactInfoUseCases,
    skills: ContentUseCases<Skill>,
    projects: ContentUseCases<Project>,
    experiences: ContentUseCases<Experience>,
    educations: ContentUseCases<Education>,
    hobbies: ContentUseCases<Hobby>,
    contact_messages: ContactMessageUseCases,
    testimonials: TestimonialUseCases,
    media: MediaUseCases,
    render_home_page: Option<Arc<dyn RenderHomePageUseCase + Send + Sync>>,
    submit_page_form: Option<Arc<dyn SubmitPageFormUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let languages = LanguageSettings::default();
        let jwt = Arc::new(test_jwt_service());

        Self {
            auth: AuthUseCases {
                login: Arc::new(LoginStaffUseCase::new(
                    InMemoryStaffUserRepository::default(),
                    Arc::new(Argon2Hasher::default()),
                    jwt.clone(),
                )),
                refresh_token: Arc::new(RefreshTokenUseCase::new(
                    InMemoryStaffUserRepository::default(),
                    jwt,
                )),
            },
            profile: ProfileUseCases::new(InMemoryProfileRepository::default(), languages.clone()),
            contact_info: ContactInfoUseCases::new(InMemoryContactInfoRepository::default()),
            skills: ContentUseCases::new(InMemoryContentRepository::default(), languages.clone()),
            projects: ContentUseCases::new(InMemoryContentRepository::default(), languages.clone()),
            experiences: ContentUseCases::new(
                InMemoryContentRepository::default(),
                languages.clone(),
            ),
            educations: ContentUseCases::new(
                InMemoryContentRepository::default(),
                languages.clone(),
            ),
            hobbies: ContentUseCases::new(InMemoryContentRepository::default(), languages.clone()),
            contact_messages: ContactMessageUseCases::new(
                InMemoryContactMessageRepository::default(),
                Arc::new(LogSubmissionNotifier),
                SubmissionLimits::default(),
            ),
            testimonials: TestimonialUseCases::new(
                InMemoryTestimonialRepository::default(),
                Arc::new(LogSubmissionNotifier),
                SubmissionLimits::default(),
            ),
            media: MediaUseCases::new(
                InMemoryMediaStorage::default(),
                UploadPolicy {
                    max_upload_bytes: MediaSettings::default().max_upload_bytes,
                },
            ),
            render_home_page: None,
            submit_page_form: None,
            languages,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_languages(mut self, languages: LanguageSettings) -> Self {
        self.languages = languages;
        self
    }

    // ── auth ────────────────────────────────────────────

    pub fn with_login(mut self, uc: impl ILoginStaffUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.refresh_token = Arc::new(uc);
        self
    }

    // ── profile ─────────────────────────────────────────

    pub fn with_load_profile(mut self, uc: impl LoadProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.load = Arc::new(uc);
        self
    }

    pub fn with_create_profile(
        mut self,
        uc: impl CreateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.create = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile_translation(
        mut self,
        uc: impl UpsertProfileTranslationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.upsert_translation = Arc::new(uc);
        self
    }

    pub fn with_remove_profile_translation(
        mut self,
        uc: impl RemoveProfileTranslationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.remove_translation = Arc::new(uc);
        self
    }

    // ── contact info ────────────────────────────────────

    pub fn with_load_contact_info(
        mut self,
        uc: impl LoadContactInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_info.load = Arc::new(uc);
        self
    }

    pub fn with_create_contact_info(
        mut self,
        uc: impl CreateContactInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_info.create = Arc::new(uc);
        self
    }

    pub fn with_update_contact_info(
        mut self,
        uc: impl UpdateContactInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_info.update = Arc::new(uc);
        self
    }

    // ── content ─────────────────────────────────────────

    pub fn with_skills(mut self, use_cases: ContentUseCases<Skill>) -> Self {
        self.skills = use_cases;
        self
    }

    pub fn with_projects(mut self, use_cases: ContentUseCases<Project>) -> Self {
        self.projects = use_cases;
        self
    }

    pub fn with_experiences(mut self, use_cases: ContentUseCases<Experience>) -> Self {
        self.experiences = use_cases;
        self
    }

    pub fn with_educations(mut self, use_cases: ContentUseCases<Education>) -> Self {
        self.educations = use_cases;
        self
    }

    pub fn with_hobbies(mut self, use_cases: ContentUseCases<Hobby>) -> Self {
        self.hobbies = use_cases;
        self
    }

    // ── contact messages ────────────────────────────────

    pub fn with_list_contact_messages(
        mut self,
        uc: impl ListContactMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_messages.list = Arc::new(uc);
        self
    }

    pub fn with_get_contact_message(
        mut self,
        uc: impl GetContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_messages.get = Arc::new(uc);
        self
    }

    pub fn with_delete_contact_message(
        mut self,
        uc: impl DeleteContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_messages.delete = Arc::new(uc);
        self
    }

    // ── testimonials ────────────────────────────────────

    pub fn with_list_testimonials(
        mut self,
        uc: impl ListTestimonialsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.list = Arc::new(uc);
        self
    }

    pub fn with_set_testimonial_approval(
        mut self,
        uc: impl SetTestimonialApprovalUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.set_approval = Arc::new(uc);
        self
    }

    pub fn with_count_pending_testimonials(
        mut self,
        uc: impl CountPendingTestimonialsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.count_pending = Arc::new(uc);
        self
    }

    pub fn with_delete_testimonial(
        mut self,
        uc: impl DeleteTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.delete = Arc::new(uc);
        self
    }

    // ── media ───────────────────────────────────────────

    pub fn with_media(
        mut self,
        upload: impl UploadMediaUseCase + Send + Sync + 'static,
        fetch: impl FetchMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.media = MediaUseCases {
            upload: Arc::new(upload),
            fetch: Arc::new(fetch),
        };
        self
    }

    // ── page ────────────────────────────────────────────

    pub fn with_render_home_page(
        mut self,
        uc: impl RenderHomePageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.render_home_page = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_page_form(
        mut self,
        uc: impl SubmitPageFormUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_page_form = Some(Arc::new(uc));
        self
    }

    /// Unless overridden, the page reads from the same use cases as the
    /// admin routes of the built state.
    pub fn build(self) -> web::Data<AppState> {
        let wired = PageUseCases::new(
            PageSources {
                profile: self.profile.load.clone(),
                contact_info: self.contact_info.load.clone(),
                skills: self.skills.list.clone(),
                projects: self.projects.list.clone(),
                experiences: self.experiences.list.clone(),
                educations: self.educations.list.clone(),
                hobbies: self.hobbies.list.clone(),
                testimonials: self.testimonials.list_approved.clone(),
            },
            self.contact_messages.submit.clone(),
            self.testimonials.submit.clone(),
            self.languages.clone(),
        );

        web::Data::new(AppState {
            page: PageUseCases {
                render: self.render_home_page.unwrap_or(wired.render),
                submit: self.submit_page_form.unwrap_or(wired.submit),
            },
            languages: self.languages,
            auth: self.auth,
            profile: self.profile,
            contact_info: self.contact_info,
            skills: self.skills,
            projects: self.projects,
            experiences: self.experiences,
            educations: self.educations,
            hobbies: self.hobbies,
            contact_messages: self.contact_messages,
            testimonials: self.testimonials,
            media: self.media,
        })
    }
}
