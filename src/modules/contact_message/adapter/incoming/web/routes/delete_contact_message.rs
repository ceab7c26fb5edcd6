use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::contact_message::application::ports::incoming::use_cases::DeleteContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/contact-messages/{id}")]
pub async fn delete_contact_message_handler(
    staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact_messages.delete.execute(id).await {
        Ok(()) => {
            info!(message_id = %id, staff_id = %staff.user_id, "Contact message deleted");
            ApiResponse::no_content()
        }

        Err(DeleteContactMessageError::NotFound) => {
            ApiResponse::not_found("CONTACT_MESSAGE_NOT_FOUND", "Contact message not found")
        }

        Err(DeleteContactMessageError::RepositoryError(e)) => {
            error!("Failed to delete contact message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_message::application::ports::incoming::use_cases::DeleteContactMessageUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockDelete {
        result: Result<(), DeleteContactMessageError>,
    }

    #[async_trait]
    impl DeleteContactMessageUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteContactMessageError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockDelete, auth: Option<String>) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_delete_contact_message(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_contact_message_handler),
        )
        .await;

        let mut req = test::TestRequest::delete()
            .uri(&format!("/api/admin/contact-messages/{}", Uuid::new_v4()));
        if let Some(auth) = auth {
            req = req.insert_header(("Authorization", auth));
        }
        test::call_service(&app, req.to_request()).await.status()
    }

    #[actix_web::test]
    async fn test_delete_success() {
        let status = call(MockDelete { result: Ok(()) }, Some(staff_bearer())).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_not_found() {
        let status = call(
            MockDelete {
                result: Err(DeleteContactMessageError::NotFound),
            },
            Some(staff_bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_requires_token() {
        let status = call(MockDelete { result: Ok(()) }, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
