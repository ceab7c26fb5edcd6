use std::sync::Arc;

use crate::modules::contact_message::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::page::application::ports::incoming::use_cases::{
    RenderHomePageUseCase, SubmitPageFormUseCase,
};
use crate::modules::page::application::services::{
    PageSources, RenderHomePageService, SubmitPageFormService,
};
use crate::modules::testimonial::application::ports::incoming::use_cases::SubmitTestimonialUseCase;
use crate::shared::i18n::LanguageSettings;

#[derive(Clone)]
pub struct PageUseCases {
    pub render: Arc<dyn RenderHomePageUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitPageFormUseCase + Send + Sync>,
}

impl PageUseCases {
    pub fn new(
        sources: PageSources,
        submit_contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
        submit_testimonial: Arc<dyn SubmitTestimonialUseCase + Send + Sync>,
        languages: LanguageSettings,
    ) -> Self {
        Self {
            render: Arc::new(RenderHomePageService::new(sources, languages.clone())),
            submit: Arc::new(SubmitPageFormService::new(
                submit_contact,
                submit_testimonial,
                languages,
            )),
        }
    }
}
