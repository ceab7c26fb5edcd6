use actix_web::{get, web, Responder};
use tracing::error;

use super::ProfileResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::profile::application::ports::incoming::use_cases::LoadProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/profile")]
pub async fn get_profile_handler(
    _staff: AuthenticatedStaff,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.load.execute().await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),

        Err(LoadProfileError::RepositoryError(e)) => {
            error!("Failed to load profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
