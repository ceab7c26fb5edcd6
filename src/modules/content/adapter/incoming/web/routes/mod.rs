mod content_translation;
mod create_content;
mod delete_content;
mod get_content;
mod list_content;
mod update_content;

pub use content_translation::{
    remove_content_translation_handler, upsert_content_translation_handler,
};
pub use create_content::{create_content_handler, CreateContentRequest};
pub use delete_content::delete_content_handler;
pub use get_content::get_content_handler;
pub use list_content::{list_content_handler, SearchQuery};
pub use update_content::update_content_handler;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::domain::{
    ContentKind, ContentRecord, Education, Experience, Hobby, Project, Skill,
};
use crate::shared::api::ApiResponse;
use crate::shared::i18n::LanguageCode;
use crate::AppState;

/// A content kind served under `/api/admin/{KIND}`.
pub trait ContentRoutes: ContentKind {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self>;
}

impl ContentRoutes for Skill {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self> {
        &state.skills
    }
}

impl ContentRoutes for Project {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self> {
        &state.projects
    }
}

impl ContentRoutes for Experience {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self> {
        &state.experiences
    }
}

impl ContentRoutes for Education {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self> {
        &state.educations
    }
}

impl ContentRoutes for Hobby {
    fn use_cases(state: &AppState) -> &ContentUseCases<Self> {
        &state.hobbies
    }
}

#[derive(Debug, Serialize)]
#[serde(bound = "")]
pub struct ContentResponse<K: ContentKind> {
    #[serde(flatten)]
    pub record: ContentRecord<K>,
    pub label: String,
}

impl<K: ContentKind> ContentResponse<K> {
    /// Labels on the admin side are resolved in the default language.
    pub fn new(record: ContentRecord<K>, default_language: &LanguageCode) -> Self {
        let label = record.label(default_language, default_language);
        Self { record, label }
    }
}

/// Registers the admin routes of one content kind.
pub fn configure_content<K: ContentRoutes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/admin/{}", K::KIND))
            .route(web::get().to(list_content_handler::<K>))
            .route(web::post().to(create_content_handler::<K>)),
    )
    .service(
        web::resource(format!("/api/admin/{}/{{id}}", K::KIND))
            .route(web::get().to(get_content_handler::<K>))
            .route(web::put().to(update_content_handler::<K>))
            .route(web::delete().to(delete_content_handler::<K>)),
    )
    .service(
        web::resource(format!("/api/admin/{}/{{id}}/translations/{{lang}}", K::KIND))
            .route(web::put().to(upsert_content_translation_handler::<K>))
            .route(web::delete().to(remove_content_translation_handler::<K>)),
    );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_content::<Skill>)
        .configure(configure_content::<Project>)
        .configure(configure_content::<Experience>)
        .configure(configure_content::<Education>)
        .configure(configure_content::<Hobby>);
}

fn not_found<K: ContentKind>() -> HttpResponse {
    ApiResponse::not_found(
        "CONTENT_NOT_FOUND",
        &format!("{} not found", K::NAME),
    )
}
