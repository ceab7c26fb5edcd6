use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use super::TestimonialResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::testimonial::application::ports::incoming::use_cases::ListTestimonialsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTestimonialsQuery {
    pub approved: Option<bool>,
    pub search: Option<String>,
}

#[get("/api/admin/testimonials")]
pub async fn list_testimonials_handler(
    _staff: AuthenticatedStaff,
    query: web::Query<ListTestimonialsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data
        .testimonials
        .list
        .execute(query.approved, query.search)
        .await
    {
        Ok(testimonials) => ApiResponse::success(
            testimonials
                .into_iter()
                .map(TestimonialResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListTestimonialsError::RepositoryError(e)) => {
            error!("Failed to list testimonials: {}", e);
            ApiResponse::internal_error()
        }
    }
}
