use std::collections::{BTreeMap, HashMap};

use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};

use super::{language_not_supported, render_failed};
use crate::modules::page::application::domain::{FormName, HomePage, PageSubmission};
use crate::modules::page::application::ports::incoming::use_cases::{
    PageSubmissionOutcome, SubmitPageFormError,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;
use crate::AppState;

/// The page redisplayed after a failed submission.
#[derive(Debug, Serialize)]
pub struct RejectedSubmission {
    pub page: HomePage,
    pub form: FormName,
    pub values: BTreeMap<String, String>,
    /// Keyed by input name, e.g. `contact-email`.
    pub errors: FieldErrors,
}

#[post("/{lang}/")]
pub async fn submit_page_form_handler(
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = path.into_inner();
    let fields = form.into_inner();

    if data.languages.resolve(&language).is_none() {
        return language_not_supported();
    }

    let Some(submission) = PageSubmission::from_fields(&fields) else {
        return ApiResponse::bad_request("UNKNOWN_FORM", "No known form was submitted");
    };

    match data.page.submit.execute(&language, submission).await {
        Ok(outcome) => {
            if let PageSubmissionOutcome::Discarded { .. } = outcome {
                info!(language = %language, "Page submission discarded");
            }
            ApiResponse::see_other(&outcome.location())
        }

        Err(SubmitPageFormError::Validation { form, errors }) => {
            redisplay(&data, &language, form, &fields, errors).await
        }

        Err(SubmitPageFormError::LanguageNotSupported(_)) => language_not_supported(),

        Err(SubmitPageFormError::RepositoryError(e)) => {
            error!("Failed to store page submission: {}", e);
            ApiResponse::internal_error()
        }
    }
}

async fn redisplay(
    data: &AppState,
    language: &str,
    form: FormName,
    fields: &HashMap<String, String>,
    errors: FieldErrors,
) -> HttpResponse {
    let page = match data.page.render.execute(language, None).await {
        Ok(page) => page,
        Err(e) => return render_failed(e),
    };

    ApiResponse::rejected(
        StatusCode::UNPROCESSABLE_ENTITY,
        RejectedSubmission {
            page,
            form,
            values: form.values(fields),
            errors: errors.with_prefix(&form.prefix()),
        },
        "VALIDATION_ERROR",
        "One or more fields are invalid",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::page::application::ports::incoming::use_cases::{
        RenderHomePageError, RenderHomePageUseCase, SubmitPageFormUseCase,
    };
    use crate::modules::page::application::domain::Notice;
    use crate::shared::api::custom_form_config;
    use crate::shared::config::SubmissionLimits;
    use crate::shared::i18n::LanguageCode;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::page_fixtures::home_page;
    use actix_web::{http::header, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    struct StaticRender;

    #[async_trait]
    impl RenderHomePageUseCase for StaticRender {
        async fn execute(
            &self,
            language: &str,
            _notice: Option<String>,
        ) -> Result<HomePage, RenderHomePageError> {
            Ok(home_page(language))
        }
    }

    #[derive(Clone, Default)]
    struct MockSubmit {
        seen: Arc<Mutex<Vec<FormName>>>,
        result: Option<Result<PageSubmissionOutcome, SubmitPageFormError>>,
    }

    #[async_trait]
    impl SubmitPageFormUseCase for MockSubmit {
        async fn execute(
            &self,
            language: &str,
            submission: PageSubmission,
        ) -> Result<PageSubmissionOutcome, SubmitPageFormError> {
            self.seen.lock().unwrap().push(submission.form());
            self.result.clone().unwrap_or_else(|| {
                Ok(PageSubmissionOutcome::Accepted {
                    language: LanguageCode::parse(language).unwrap(),
                    notice: Notice::ContactSent,
                })
            })
        }
    }

    async fn post(submit: MockSubmit, uri: &str, body: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_render_home_page(StaticRender)
            .with_submit_page_form(submit)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(submit_page_form_handler))
                .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body.to_string())
            .to_request();
        test::call_service(&app, req).await
    }

    /// Posts through the real submission use cases and the sized form config.
    async fn post_wired(uri: &str, body: String) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_render_home_page(StaticRender)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_form_config(&SubmissionLimits::default()))
                .service(submit_page_form_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body)
            .to_request();
        test::call_service(&app, req).await
    }

    fn contact_body(message_chars: usize) -> String {
        format!(
            "submit_contact=&contact-name=Jane&contact-email=jane%40example.com&contact-message={}",
            "%C3%A9".repeat(message_chars)
        )
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[actix_web::test]
    async fn test_contact_submission_redirects_with_notice() {
        let submit = MockSubmit::default();

        let resp = post(
            submit.clone(),
            "/en/",
            "submit_contact=&contact-name=Jane&contact-email=jane%40example.com&contact-message=Hi",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/en/?notice=contact_sent");
        assert_eq!(*submit.seen.lock().unwrap(), vec![FormName::Contact]);
    }

    #[actix_web::test]
    async fn test_discarded_submission_redirects_to_page() {
        let submit = MockSubmit {
            result: Some(Ok(PageSubmissionOutcome::Discarded {
                language: LanguageCode::parse("fr").unwrap(),
            })),
            ..MockSubmit::default()
        };

        let resp = post(
            submit,
            "/fr/",
            "submit_testimonial=1&testimonial-name=Bot&testimonial-nickname=spam",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/fr/");
    }

    #[actix_web::test]
    async fn test_missing_discriminator_is_unknown_form() {
        let submit = MockSubmit::default();

        let resp = post(submit.clone(), "/en/", "contact-name=Jane").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_FORM");
        assert!(submit.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unsupported_language_is_404_before_submitting() {
        let submit = MockSubmit::default();

        let resp = post(submit.clone(), "/de/", "submit_contact=").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "LANGUAGE_NOT_SUPPORTED");
        assert!(submit.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_validation_failure_redisplays_page_with_errors() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Enter a valid email address");
        let submit = MockSubmit {
            result: Some(Err(SubmitPageFormError::Validation {
                form: FormName::Contact,
                errors,
            })),
            ..MockSubmit::default()
        };

        let resp = post(
            submit,
            "/en/",
            "submit_contact=&contact-name=Jane&contact-email=nope&contact-nickname=",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["data"]["form"], "contact");
        assert_eq!(body["data"]["page"]["language"], "en");
        assert_eq!(body["data"]["values"]["contact-email"], "nope");
        assert!(body["data"]["values"].get("contact-nickname").is_none());
        assert_eq!(
            body["data"]["errors"]["contact-email"][0],
            "Enter a valid email address"
        );
    }

    #[actix_web::test]
    async fn test_repository_error_is_500() {
        let submit = MockSubmit {
            result: Some(Err(SubmitPageFormError::RepositoryError("db down".into()))),
            ..MockSubmit::default()
        };

        let resp = post(submit, "/en/", "submit_contact=").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_longest_accented_contact_message_is_accepted() {
        let resp = post_wired("/en/", contact_body(5000)).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/en/?notice=contact_sent");
    }

    #[actix_web::test]
    async fn test_contact_message_over_limit_is_redisplayed_not_rejected_by_extractor() {
        let resp = post_wired("/en/", contact_body(5001)).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["data"]["form"], "contact");
        assert!(body["data"]["errors"]["contact-message"].is_array());
    }
}
