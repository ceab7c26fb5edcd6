use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::testimonial::application::ports::incoming::use_cases::CountPendingTestimonialsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PendingCountResponse {
    pub pending: u64,
}

#[get("/api/admin/testimonials/pending-count")]
pub async fn count_pending_testimonials_handler(
    _staff: AuthenticatedStaff,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonials.count_pending.execute().await {
        Ok(pending) => ApiResponse::success(PendingCountResponse { pending }),

        Err(CountPendingTestimonialsError::RepositoryError(e)) => {
            error!("Failed to count pending testimonials: {}", e);
            ApiResponse::internal_error()
        }
    }
}
