use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::ContactMessageResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::contact_message::application::ports::incoming::use_cases::GetContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/contact-messages/{id}")]
pub async fn get_contact_message_handler(
    _staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_messages.get.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(ContactMessageResponse::from(message)),

        Err(GetContactMessageError::NotFound) => {
            ApiResponse::not_found("CONTACT_MESSAGE_NOT_FOUND", "Contact message not found")
        }

        Err(GetContactMessageError::RepositoryError(e)) => {
            error!("Failed to read contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
