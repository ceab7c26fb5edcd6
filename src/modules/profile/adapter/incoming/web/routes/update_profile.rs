use actix_web::{put, web, Responder};
use tracing::{error, info};

use super::ProfileResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::profile::application::domain::entities::ProfileFields;
use crate::modules::profile::application::ports::incoming::use_cases::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/profile")]
pub async fn update_profile_handler(
    staff: AuthenticatedStaff,
    req: web::Json<ProfileFields>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.update.execute(req.into_inner()).await {
        Ok(profile) => {
            info!(staff_id = %staff.user_id, "Profile updated");
            ApiResponse::success(ProfileResponse::from(profile))
        }

        Err(UpdateProfileError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Failed to update profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::services::UpdateProfileService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryProfileRepository;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_update_profile_fields() {
        let state = TestAppStateBuilder::default()
            .with_update_profile(UpdateProfileService::new(InMemoryProfileRepository::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/profile")
            .insert_header(("Authorization", staff_bearer()))
            .set_json(json!({ "resume": "resume/0a1b2c.pdf" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["resume"], "resume/0a1b2c.pdf");
        assert_eq!(body["data"]["profile_picture"], Value::Null);
    }
}
