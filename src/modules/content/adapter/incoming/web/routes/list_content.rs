use actix_web::{web, Responder};
use serde::Deserialize;
use tracing::error;

use super::{ContentResponse, ContentRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::content::application::ports::incoming::use_cases::ListContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// `GET /api/admin/{kind}`
pub async fn list_content_handler<K: ContentRoutes>(
    _staff: AuthenticatedStaff,
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match K::use_cases(&data)
        .list
        .execute(query.into_inner().search)
        .await
    {
        Ok(records) => {
            let default = data.languages.default_language();
            ApiResponse::success(
                records
                    .into_iter()
                    .map(|r| ContentResponse::new(r, default))
                    .collect::<Vec<_>>(),
            )
        }

        Err(ListContentError::RepositoryError(e)) => {
            error!("Failed to list {}: {}", K::KIND, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::configure_content;
    use crate::modules::content::application::content_use_cases::ContentUseCases;
    use crate::modules::content::application::domain::{Skill, SkillText};
    use crate::modules::content::application::ports::outgoing::{
        ContentRepository, ContentRepositoryError,
    };
    use crate::shared::i18n::{LanguageCode, LanguageSettings};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryContentRepository;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    async fn call(repo: InMemoryContentRepository<Skill>, uri: &str) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_skills(ContentUseCases::new(repo, LanguageSettings::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .configure(configure_content::<Skill>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", staff_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_list_returns_labels_and_filters_by_search() {
        let repo = InMemoryContentRepository::<Skill>::default();
        for (en, fr) in [("Rust", "Rust"), ("Cooking", "Cuisine")] {
            repo.create(
                Skill { proficiency: 50 },
                [
                    (LanguageCode::parse("en").unwrap(), SkillText { name: en.into() }),
                    (LanguageCode::parse("fr").unwrap(), SkillText { name: fr.into() }),
                ]
                .into_iter()
                .collect(),
            )
            .await
            .unwrap();
        }

        let (status, body) = call(repo, "/api/admin/skills?search=cuisine").await;

        assert_eq!(status, StatusCode::OK);
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["label"], "Cooking");
        assert_eq!(items[0]["proficiency"], 50);
        assert_eq!(items[0]["translations"]["fr"]["name"], "Cuisine");
    }

    #[actix_web::test]
    async fn test_list_repository_error() {
        let repo = InMemoryContentRepository::<Skill>::default()
            .failing_with(ContentRepositoryError::DatabaseError("db down".into()));

        let (status, body) = call(repo, "/api/admin/skills").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_list_requires_authentication() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .configure(configure_content::<Skill>),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
