use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::media::application::ports::incoming::use_cases::UploadMediaError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Raw request body upload; the format is detected from the bytes.
#[put("/api/admin/media/{category}")]
pub async fn upload_media_handler(
    staff: AuthenticatedStaff,
    path: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = path.into_inner();

    match data.media.upload.execute(&category, body.to_vec()).await {
        Ok(stored) => {
            info!(staff_id = %staff.user_id, path = %stored.path, "Media uploaded");
            ApiResponse::created(stored)
        }

        Err(UploadMediaError::UnknownCategory(c)) => ApiResponse::not_found(
            "MEDIA_CATEGORY_NOT_FOUND",
            &format!("Unknown media category '{}'", c),
        ),

        Err(e @ UploadMediaError::Empty) => {
            ApiResponse::bad_request("EMPTY_UPLOAD", &e.to_string())
        }

        Err(e @ UploadMediaError::TooLarge { .. }) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }

        Err(e @ UploadMediaError::UnsupportedType(_)) => {
            ApiResponse::bad_request("UNSUPPORTED_MEDIA_TYPE", &e.to_string())
        }

        Err(UploadMediaError::StorageError(e)) => {
            error!("Failed to store {} upload: {}", category, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::entities::UploadPolicy;
    use crate::modules::media::application::services::{FetchMediaService, UploadMediaService};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{staff_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryMediaStorage;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    macro_rules! init_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_media(
                                UploadMediaService::new(
                                    $storage.clone(),
                                    UploadPolicy {
                                        max_upload_bytes: 32,
                                    },
                                ),
                                FetchMediaService::new($storage.clone()),
                            )
                            .build(),
                    )
                    .app_data(token_provider_data())
                    .service(upload_media_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_upload_returns_path_and_url() {
        let storage = InMemoryMediaStorage::default();
        let app = init_app!(storage);

        let req = test::TestRequest::put()
            .uri("/api/admin/media/profile")
            .insert_header(("Authorization", staff_bearer()))
            .set_payload(&b"\xFF\xD8\xFF\xE0jfif"[..])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let path = body["data"]["path"].as_str().unwrap();
        assert!(path.starts_with("profile/") && path.ends_with(".jpg"));
        assert_eq!(body["data"]["url"], format!("/media/{}", path));
        assert_eq!(storage.len(), 1);
    }

    #[actix_web::test]
    async fn test_upload_over_limit_is_413() {
        let storage = InMemoryMediaStorage::default();
        let app = init_app!(storage);

        let mut big = b"%PDF-".to_vec();
        big.resize(33, b'x');
        let req = test::TestRequest::put()
            .uri("/api/admin/media/resume")
            .insert_header(("Authorization", staff_bearer()))
            .set_payload(big)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
    }

    #[actix_web::test]
    async fn test_upload_rejects_unsupported_type_and_category() {
        let storage = InMemoryMediaStorage::default();
        let app = init_app!(storage);

        let req = test::TestRequest::put()
            .uri("/api/admin/media/projects")
            .insert_header(("Authorization", staff_bearer()))
            .set_payload("<script>")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/admin/media/secrets")
            .insert_header(("Authorization", staff_bearer()))
            .set_payload("GIF89a")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
