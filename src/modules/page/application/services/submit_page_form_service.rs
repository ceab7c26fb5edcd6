use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact_message::application::ports::incoming::use_cases::{
    ContactSubmissionOutcome, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::page::application::domain::{FormName, Notice, PageSubmission};
use crate::modules::page::application::ports::incoming::use_cases::{
    PageSubmissionOutcome, SubmitPageFormError, SubmitPageFormUseCase,
};
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    SubmitTestimonialError, SubmitTestimonialUseCase, TestimonialSubmissionOutcome,
};
use crate::shared::i18n::LanguageSettings;

/// Routes a page POST to the contact or testimonial submission.
pub struct SubmitPageFormService {
    contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    testimonial: Arc<dyn SubmitTestimonialUseCase + Send + Sync>,
    languages: LanguageSettings,
}

impl SubmitPageFormService {
    pub fn new(
        contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
        testimonial: Arc<dyn SubmitTestimonialUseCase + Send + Sync>,
        languages: LanguageSettings,
    ) -> Self {
        Self {
            contact,
            testimonial,
            languages,
        }
    }
}

#[async_trait]
impl SubmitPageFormUseCase for SubmitPageFormService {
    async fn execute(
        &self,
        language: &str,
        submission: PageSubmission,
    ) -> Result<PageSubmissionOutcome, SubmitPageFormError> {
        let language = self
            .languages
            .resolve(language)
            .ok_or_else(|| SubmitPageFormError::LanguageNotSupported(language.to_string()))?;

        let accepted = match submission {
            PageSubmission::Contact(form) => match self.contact.execute(form).await {
                Ok(ContactSubmissionOutcome::Stored(_)) => Some(Notice::ContactSent),
                Ok(ContactSubmissionOutcome::Discarded) => None,
                Err(SubmitContactMessageError::Validation(errors)) => {
                    return Err(SubmitPageFormError::Validation {
                        form: FormName::Contact,
                        errors,
                    })
                }
                Err(SubmitContactMessageError::RepositoryError(e)) => {
                    return Err(SubmitPageFormError::RepositoryError(e))
                }
            },
            PageSubmission::Testimonial(form) => match self.testimonial.execute(form).await {
                Ok(TestimonialSubmissionOutcome::Stored(_)) => Some(Notice::TestimonialSubmitted),
                Ok(TestimonialSubmissionOutcome::Discarded) => None,
                Err(SubmitTestimonialError::Validation(errors)) => {
                    return Err(SubmitPageFormError::Validation {
                        form: FormName::Testimonial,
                        errors,
                    })
                }
                Err(SubmitTestimonialError::RepositoryError(e)) => {
                    return Err(SubmitPageFormError::RepositoryError(e))
                }
            },
        };

        Ok(match accepted {
            Some(notice) => PageSubmissionOutcome::Accepted { language, notice },
            None => PageSubmissionOutcome::Discarded { language },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_message::application::domain::entities::ContactForm;
    use crate::modules::contact_message::application::services::SubmitContactMessageService;
    use crate::modules::email::adapter::outgoing::LogSubmissionNotifier;
    use crate::modules::testimonial::application::domain::entities::TestimonialForm;
    use crate::modules::testimonial::application::ports::outgoing::TestimonialRepository;
    use crate::modules::testimonial::application::services::SubmitTestimonialService;
    use crate::shared::config::SubmissionLimits;
    use crate::tests::support::stubs::{
        InMemoryContactMessageRepository, InMemoryTestimonialRepository,
    };

    struct Fixture {
        messages: InMemoryContactMessageRepository,
        testimonials: InMemoryTestimonialRepository,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                messages: InMemoryContactMessageRepository::default(),
                testimonials: InMemoryTestimonialRepository::default(),
            }
        }

        fn service(&self) -> SubmitPageFormService {
            SubmitPageFormService::new(
                Arc::new(SubmitContactMessageService::new(
                    self.messages.clone(),
                    Arc::new(LogSubmissionNotifier),
                    SubmissionLimits::default(),
                )),
                Arc::new(SubmitTestimonialService::new(
                    self.testimonials.clone(),
                    Arc::new(LogSubmissionNotifier),
                    SubmissionLimits::default(),
                )),
                LanguageSettings::default(),
            )
        }
    }

    fn contact() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
            nickname: String::new(),
        }
    }

    fn testimonial() -> TestimonialForm {
        TestimonialForm {
            name: "Sam".to_string(),
            role_company: "CTO, Acme".to_string(),
            quote: "Great to work with.".to_string(),
            nickname: String::new(),
        }
    }

    #[tokio::test]
    async fn test_contact_redirects_with_notice() {
        let fixture = Fixture::new();

        let outcome = fixture
            .service()
            .execute("fr", PageSubmission::Contact(contact()))
            .await
            .unwrap();

        assert_eq!(outcome.location(), "/fr/?notice=contact_sent");
        assert_eq!(fixture.messages.count(), 1);
    }

    #[tokio::test]
    async fn test_testimonial_is_stored_unapproved() {
        let fixture = Fixture::new();

        let outcome = fixture
            .service()
            .execute("en", PageSubmission::Testimonial(testimonial()))
            .await
            .unwrap();

        assert_eq!(outcome.location(), "/en/?notice=testimonial_submitted");
        let stored = fixture.testimonials.list(None, None).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].is_approved);
    }

    #[tokio::test]
    async fn test_honeypot_redirects_without_notice_or_row() {
        let fixture = Fixture::new();
        let mut spam = contact();
        spam.nickname = "bot".to_string();

        let outcome = fixture
            .service()
            .execute("en", PageSubmission::Contact(spam))
            .await
            .unwrap();

        assert_eq!(outcome.location(), "/en/");
        assert_eq!(fixture.messages.count(), 0);
    }

    #[tokio::test]
    async fn test_validation_errors_name_the_form() {
        let fixture = Fixture::new();
        let mut invalid = testimonial();
        invalid.quote.clear();

        let err = fixture
            .service()
            .execute("en", PageSubmission::Testimonial(invalid))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SubmitPageFormError::Validation { form: FormName::Testimonial, ref errors } if errors.contains("quote")
        ));
        assert_eq!(fixture.testimonials.count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_language_stores_nothing() {
        let fixture = Fixture::new();

        let err = fixture
            .service()
            .execute("de", PageSubmission::Contact(contact()))
            .await
            .unwrap_err();

        assert_eq!(err, SubmitPageFormError::LanguageNotSupported("de".to_string()));
        assert_eq!(fixture.messages.count(), 0);
    }
}
