use actix_web::{web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::{not_found, ContentResponse, ContentRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::content::application::ports::incoming::use_cases::UpdateContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `PUT /api/admin/{kind}/{id}`; translations are left alone.
pub async fn update_content_handler<K: ContentRoutes>(
    staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    req: web::Json<K>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match K::use_cases(&data).update.execute(id, req.into_inner()).await {
        Ok(record) => {
            info!(staff_id = %staff.user_id, id = %id, "{} entry updated", K::NAME);
            ApiResponse::success(ContentResponse::new(
                record,
                data.languages.default_language(),
            ))
        }

        Err(UpdateContentError::NotFound) => not_found::<K>(),

        Err(UpdateContentError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(UpdateContentError::RepositoryError(e)) => {
            error!("Failed to update {} {}: {}", K::KIND, id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::configure_content;
    use super::*;
    use crate::modules::content::application::content_use_cases::ContentUseCases;
    use crate::modules::content::application::domain::{Hobby, HobbyText};
    use crate::modules::content::application::ports::outgoing::ContentRepository;
    use crate::shared::i18n::{LanguageCode, LanguageSettings};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryContentRepository;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_update_keeps_translations() {
        let repo = InMemoryContentRepository::<Hobby>::default();
        let created = repo
            .create(
                Hobby {
                    icon: Some("hobbies/chess.png".to_string()),
                    font_awesome_icon: String::new(),
                },
                [(
                    LanguageCode::parse("en").unwrap(),
                    HobbyText {
                        name: "Chess".to_string(),
                        description: String::new(),
                    },
                )]
                .into_iter()
                .collect(),
            )
            .await
            .unwrap();
        let state = TestAppStateBuilder::default()
            .with_hobbies(ContentUseCases::new(repo, LanguageSettings::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .configure(configure_content::<Hobby>),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/hobbies/{}", created.id))
            .insert_header(("Authorization", staff_bearer()))
            .set_json(json!({ "icon": null, "font_awesome_icon": "fa-solid fa-chess" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["font_awesome_icon"], "fa-solid fa-chess");
        assert!(body["data"]["icon"].is_null());
        assert_eq!(body["data"]["translations"]["en"]["name"], "Chess");

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/hobbies/{}", Uuid::new_v4()))
            .insert_header(("Authorization", staff_bearer()))
            .set_json(json!({ "font_awesome_icon": "fa-solid fa-chess" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
