use actix_web::{web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::{not_found, ContentRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::content::application::ports::incoming::use_cases::DeleteContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `DELETE /api/admin/{kind}/{id}`
pub async fn delete_content_handler<K: ContentRoutes>(
    staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match K::use_cases(&data).delete.execute(id).await {
        Ok(()) => {
            info!(staff_id = %staff.user_id, id = %id, "{} entry deleted", K::NAME);
            ApiResponse::no_content()
        }

        Err(DeleteContentError::NotFound) => not_found::<K>(),

        Err(DeleteContentError::RepositoryError(e)) => {
            error!("Failed to delete {} {}: {}", K::KIND, id, e);
            ApiResponse::internal_error()
        }
    }
}
