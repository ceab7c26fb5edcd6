use actix_web::{get, post, put, web, Responder};
use tracing::{error, info};

use super::ContactInfoResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::contact_info::application::ports::incoming::use_cases::{
    CreateContactInfoError, LoadContactInfoError, UpdateContactInfoError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/contact-info")]
pub async fn get_contact_info_handler(
    _staff: AuthenticatedStaff,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_info.load.execute().await {
        Ok(info) => ApiResponse::success(ContactInfoResponse::from(info)),

        Err(LoadContactInfoError::RepositoryError(e)) => {
            error!("Failed to load contact info: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/contact-info")]
pub async fn create_contact_info_handler(
    staff: AuthenticatedStaff,
    req: web::Json<ContactInfo>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_info.create.execute(req.into_inner()).await {
        Ok(created) => {
            info!(staff_id = %staff.user_id, "Contact info created");
            ApiResponse::created(ContactInfoResponse::from(created))
        }

        Err(CreateContactInfoError::AlreadyExists) => {
            ApiResponse::conflict("CONTACT_INFO_ALREADY_EXISTS", "Contact info already exists")
        }

        Err(CreateContactInfoError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreateContactInfoError::RepositoryError(e)) => {
            error!("Failed to create contact info: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/contact-info")]
pub async fn update_contact_info_handler(
    staff: AuthenticatedStaff,
    req: web::Json<ContactInfo>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_info.update.execute(req.into_inner()).await {
        Ok(updated) => {
            info!(staff_id = %staff.user_id, "Contact info updated");
            ApiResponse::success(ContactInfoResponse::from(updated))
        }

        Err(UpdateContactInfoError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(UpdateContactInfoError::RepositoryError(e)) => {
            error!("Failed to update contact info: {}", e);
            ApiResponse::internal_error()
        }
    }
}
