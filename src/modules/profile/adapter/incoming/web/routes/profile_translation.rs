use actix_web::{delete, put, web, Responder};
use tracing::{error, info};

use super::ProfileResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::profile::application::domain::entities::ProfileText;
use crate::modules::profile::application::ports::incoming::use_cases::{
    RemoveProfileTranslationError, UpsertProfileTranslationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/profile/translations/{lang}")]
pub async fn upsert_profile_translation_handler(
    staff: AuthenticatedStaff,
    path: web::Path<String>,
    req: web::Json<ProfileText>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lang = path.into_inner();

    match data
        .profile
        .upsert_translation
        .execute(&lang, req.into_inner())
        .await
    {
        Ok(profile) => {
            info!(staff_id = %staff.user_id, language = %lang, "Profile translation saved");
            ApiResponse::success(ProfileResponse::from(profile))
        }

        Err(UpsertProfileTranslationError::LanguageNotSupported(code)) => ApiResponse::not_found(
            "LANGUAGE_NOT_SUPPORTED",
            &format!("Language '{}' is not supported", code),
        ),

        Err(UpsertProfileTranslationError::Validation(errors)) => {
            ApiResponse::validation_failed(&errors)
        }

        Err(UpsertProfileTranslationError::RepositoryError(e)) => {
            error!("Failed to save profile translation '{}': {}", lang, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/profile/translations/{lang}")]
pub async fn remove_profile_translation_handler(
    staff: AuthenticatedStaff,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lang = path.into_inner();

    match data.profile.remove_translation.execute(&lang).await {
        Ok(profile) => {
            info!(staff_id = %staff.user_id, language = %lang, "Profile translation removed");
            ApiResponse::success(ProfileResponse::from(profile))
        }

        Err(RemoveProfileTranslationError::LanguageNotSupported(code)) => ApiResponse::not_found(
            "LANGUAGE_NOT_SUPPORTED",
            &format!("Language '{}' is not supported", code),
        ),

        Err(RemoveProfileTranslationError::TranslationNotFound) => {
            ApiResponse::not_found("TRANSLATION_NOT_FOUND", "Profile translation not found")
        }

        Err(RemoveProfileTranslationError::RepositoryError(e)) => {
            error!("Failed to remove profile translation '{}': {}", lang, e);
            ApiResponse::internal_error()
        }
    }
}
