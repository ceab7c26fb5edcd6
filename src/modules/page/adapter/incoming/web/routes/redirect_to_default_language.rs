use actix_web::{get, web, Responder};

use crate::modules::page::application::domain::entities::page_url;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/")]
pub async fn redirect_to_default_language_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::found(&page_url(data.languages.default_language()))
}
