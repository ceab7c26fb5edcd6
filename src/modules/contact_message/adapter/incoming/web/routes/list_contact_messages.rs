use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use super::ContactMessageResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::contact_message::application::ports::incoming::use_cases::ListContactMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListContactMessagesQuery {
    pub search: Option<String>,
}

#[get("/api/admin/contact-messages")]
pub async fn list_contact_messages_handler(
    _staff: AuthenticatedStaff,
    query: web::Query<ListContactMessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact_messages
        .list
        .execute(query.into_inner().search)
        .await
    {
        Ok(messages) => ApiResponse::success(
            messages
                .into_iter()
                .map(ContactMessageResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListContactMessagesError::RepositoryError(e)) => {
            error!("Failed to list contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
