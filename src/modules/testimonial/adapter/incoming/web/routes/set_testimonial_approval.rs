use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::testimonial::application::ports::incoming::use_cases::SetTestimonialApprovalError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TestimonialIdsRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ApprovalChangeResponse {
    pub updated: u64,
}

#[post("/api/admin/testimonials/approve")]
pub async fn approve_testimonials_handler(
    staff: AuthenticatedStaff,
    req: web::Json<TestimonialIdsRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    set_approval(staff, req.into_inner(), true, data).await
}

#[post("/api/admin/testimonials/reject")]
pub async fn reject_testimonials_handler(
    staff: AuthenticatedStaff,
    req: web::Json<TestimonialIdsRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    set_approval(staff, req.into_inner(), false, data).await
}

async fn set_approval(
    staff: AuthenticatedStaff,
    req: TestimonialIdsRequest,
    approved: bool,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.testimonials.set_approval.execute(req.ids, approved).await {
        Ok(updated) => {
            info!(staff_id = %staff.user_id, approved, updated, "Testimonial approval changed");
            ApiResponse::success(ApprovalChangeResponse { updated })
        }

        Err(SetTestimonialApprovalError::NoIdsGiven) => {
            ApiResponse::bad_request("NO_IDS_GIVEN", "At least one testimonial id is required")
        }

        Err(SetTestimonialApprovalError::RepositoryError(e)) => {
            error!("Failed to change testimonial approval: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testimonial::application::ports::incoming::use_cases::SetTestimonialApprovalUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockApproval {
        seen: Arc<Mutex<Option<(usize, bool)>>>,
    }

    #[async_trait]
    impl SetTestimonialApprovalUseCase for MockApproval {
        async fn execute(
            &self,
            ids: Vec<Uuid>,
            approved: bool,
        ) -> Result<u64, SetTestimonialApprovalError> {
            if ids.is_empty() {
                return Err(SetTestimonialApprovalError::NoIdsGiven);
            }
            *self.seen.lock().unwrap() = Some((ids.len(), approved));
            Ok(ids.len() as u64)
        }
    }

    async fn call(uc: MockApproval, uri: &str, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_set_testimonial_approval(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(approve_testimonials_handler)
                .service(reject_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("Authorization", staff_bearer()))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_approve_reports_updated_count() {
        let uc = MockApproval::default();

        let (status, body) = call(
            uc.clone(),
            "/api/admin/testimonials/approve",
            json!({ "ids": [Uuid::new_v4(), Uuid::new_v4()] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["updated"], 2);
        assert_eq!(*uc.seen.lock().unwrap(), Some((2, true)));
    }

    #[actix_web::test]
    async fn test_reject_unapproves() {
        let uc = MockApproval::default();

        let (status, _) = call(
            uc.clone(),
            "/api/admin/testimonials/reject",
            json!({ "ids": [Uuid::new_v4()] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*uc.seen.lock().unwrap(), Some((1, false)));
    }

    #[actix_web::test]
    async fn test_empty_ids_is_bad_request() {
        let (status, body) = call(
            MockApproval::default(),
            "/api/admin/testimonials/approve",
            json!({ "ids": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "NO_IDS_GIVEN");
    }
}
