use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::render_failed;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct HomePageQuery {
    pub notice: Option<String>,
}

#[get("/{lang}/")]
pub async fn home_page_handler(
    path: web::Path<String>,
    query: web::Query<HomePageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = path.into_inner();

    match data
        .page
        .render
        .execute(&language, query.into_inner().notice)
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(e) => render_failed(e),
    }
}
