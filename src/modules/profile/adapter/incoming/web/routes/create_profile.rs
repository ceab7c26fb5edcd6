use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use super::ProfileResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::profile::application::domain::entities::{ProfileFields, ProfileText};
use crate::modules::profile::application::ports::incoming::use_cases::CreateProfileError;
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Translations;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    #[serde(flatten)]
    pub fields: ProfileFields,
    #[serde(default)]
    pub translations: Translations<ProfileText>,
}

#[post("/api/admin/profile")]
pub async fn create_profile_handler(
    staff: AuthenticatedStaff,
    req: web::Json<CreateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CreateProfileRequest {
        fields,
        translations,
    } = req.into_inner();

    match data.profile.create.execute(fields, translations).await {
        Ok(profile) => {
            info!(staff_id = %staff.user_id, "Profile created");
            ApiResponse::created(ProfileResponse::from(profile))
        }

        Err(CreateProfileError::AlreadyExists) => {
            ApiResponse::conflict("PROFILE_ALREADY_EXISTS", "A profile already exists")
        }

        Err(CreateProfileError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreateProfileError::RepositoryError(e)) => {
            error!("Failed to create profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
