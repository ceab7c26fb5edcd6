use actix_web::{web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::{not_found, ContentResponse, ContentRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::content::application::ports::incoming::use_cases::{
    RemoveContentTranslationError, UpsertContentTranslationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn language_not_supported(code: &str) -> actix_web::HttpResponse {
    ApiResponse::not_found(
        "LANGUAGE_NOT_SUPPORTED",
        &format!("Language '{}' is not supported", code),
    )
}

/// `PUT /api/admin/{kind}/{id}/translations/{lang}`
pub async fn upsert_content_translation_handler<K: ContentRoutes>(
    staff: AuthenticatedStaff,
    path: web::Path<(Uuid, String)>,
    req: web::Json<K::Text>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, lang) = path.into_inner();

    match K::use_cases(&data)
        .upsert_translation
        .execute(id, &lang, req.into_inner())
        .await
    {
        Ok(record) => {
            info!(staff_id = %staff.user_id, id = %id, language = %lang, "{} translation saved", K::NAME);
            ApiResponse::success(ContentResponse::new(
                record,
                data.languages.default_language(),
            ))
        }

        Err(UpsertContentTranslationError::NotFound) => not_found::<K>(),

        Err(UpsertContentTranslationError::LanguageNotSupported(code)) => {
            language_not_supported(&code)
        }

        Err(UpsertContentTranslationError::Validation(errors)) => {
            ApiResponse::validation_failed(&errors)
        }

        Err(UpsertContentTranslationError::RepositoryError(e)) => {
            error!("Failed to save {} {} translation '{}': {}", K::KIND, id, lang, e);
            ApiResponse::internal_error()
        }
    }
}

/// `DELETE /api/admin/{kind}/{id}/translations/{lang}`
pub async fn remove_content_translation_handler<K: ContentRoutes>(
    staff: AuthenticatedStaff,
    path: web::Path<(Uuid, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, lang) = path.into_inner();

    match K::use_cases(&data)
        .remove_translation
        .execute(id, &lang)
        .await
    {
        Ok(record) => {
            info!(staff_id = %staff.user_id, id = %id, language = %lang, "{} translation removed", K::NAME);
            ApiResponse::success(ContentResponse::new(
                record,
                data.languages.default_language(),
            ))
        }

        Err(RemoveContentTranslationError::NotFound) => not_found::<K>(),

        Err(RemoveContentTranslationError::LanguageNotSupported(code)) => {
            language_not_supported(&code)
        }

        Err(RemoveContentTranslationError::TranslationNotFound) => {
            ApiResponse::not_found("TRANSLATION_NOT_FOUND", "Translation not found")
        }

        Err(RemoveContentTranslationError::RepositoryError(e)) => {
            error!("Failed to remove {} {} translation '{}': {}", K::KIND, id, lang, e);
            ApiResponse::internal_error()
        }
    }
}
