use actix_web::{web, Responder};
use tracing::error;
use uuid::Uuid;

use super::{not_found, ContentResponse, ContentRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::content::application::ports::incoming::use_cases::GetContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/admin/{kind}/{id}`
pub async fn get_content_handler<K: ContentRoutes>(
    _staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match K::use_cases(&data).get.execute(id).await {
        Ok(record) => ApiResponse::success(ContentResponse::new(
            record,
            data.languages.default_language(),
        )),

        Err(GetContentError::NotFound) => not_found::<K>(),

        Err(GetContentError::RepositoryError(e)) => {
            error!("Failed to load {} {}: {}", K::KIND, id, e);
            ApiResponse::internal_error()
        }
    }
}
