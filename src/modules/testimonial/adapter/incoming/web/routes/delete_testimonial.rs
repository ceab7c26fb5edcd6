use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::testimonial::application::ports::incoming::use_cases::DeleteTestimonialError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/testimonials/{id}")]
pub async fn delete_testimonial_handler(
    staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.testimonials.delete.execute(id).await {
        Ok(()) => {
            info!(testimonial_id = %id, staff_id = %staff.user_id, "Testimonial deleted");
            ApiResponse::no_content()
        }

        Err(DeleteTestimonialError::NotFound) => {
            ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "Testimonial not found")
        }

        Err(DeleteTestimonialError::RepositoryError(e)) => {
            error!("Failed to delete testimonial {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testimonial::application::ports::incoming::use_cases::DeleteTestimonialUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockDelete {
        result: Result<(), DeleteTestimonialError>,
    }

    #[async_trait]
    impl DeleteTestimonialUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteTestimonialError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockDelete) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_delete_testimonial(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_testimonial_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/testimonials/{}", Uuid::new_v4()))
            .insert_header(("Authorization", staff_bearer()))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_delete_success() {
        assert_eq!(call(MockDelete { result: Ok(()) }).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_not_found() {
        let status = call(MockDelete {
            result: Err(DeleteTestimonialError::NotFound),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
