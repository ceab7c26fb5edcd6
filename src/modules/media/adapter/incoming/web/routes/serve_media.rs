use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::media::application::ports::incoming::use_cases::FetchMediaError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/media/{category}/{file}")]
pub async fn serve_media_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (category, file) = path.into_inner();

    match data.media.fetch.execute(&category, &file).await {
        // Content-addressed: a path never changes its bytes.
        Ok(media) => HttpResponse::Ok()
            .content_type(media.content_type)
            .insert_header((header::CACHE_CONTROL, "public, max-age=31536000, immutable"))
            .body(media.bytes),

        Err(FetchMediaError::NotFound) => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media file not found")
        }

        Err(FetchMediaError::StorageError(e)) => {
            error!("Failed to read media {}/{}: {}", category, file, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::adapter::outgoing::LocalMediaStorage;
    use crate::modules::media::application::domain::entities::UploadPolicy;
    use crate::modules::media::application::ports::incoming::use_cases::UploadMediaUseCase;
    use crate::modules::media::application::services::{FetchMediaService, UploadMediaService};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use tempfile::TempDir;

    #[actix_web::test]
    async fn test_serves_uploaded_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let storage = LocalMediaStorage::new(dir.path());
        let upload = UploadMediaService::new(
            storage.clone(),
            UploadPolicy {
                max_upload_bytes: 1024,
            },
        );
        let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec();
        let stored = upload.execute("projects", png.clone()).await.unwrap();
        let state = TestAppStateBuilder::default()
            .with_media(upload, FetchMediaService::new(storage))
            .build();
        let app = test::init_service(App::new().app_data(state).service(serve_media_handler)).await;

        let req = test::TestRequest::get().uri(&stored.url).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert_eq!(test::read_body(resp).await, png);

        let req = test::TestRequest::get()
            .uri("/media/projects/notours.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
