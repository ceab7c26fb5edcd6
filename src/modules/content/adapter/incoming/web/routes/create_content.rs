use actix_web::{web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use super::{ContentResponse, ContentRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::modules::content::application::domain::ContentKind;
use crate::modules::content::application::ports::incoming::use_cases::CreateContentError;
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Translations;
use crate::AppState;

/// Universal fields at the top level, translations keyed by language code.
#[derive(Debug, Deserialize)]
#[serde(bound = "")]
pub struct CreateContentRequest<K: ContentKind> {
    #[serde(flatten)]
    pub data: K,
    #[serde(default)]
    pub translations: Translations<K::Text>,
}

/// `POST /api/admin/{kind}`
pub async fn create_content_handler<K: ContentRoutes>(
    staff: AuthenticatedStaff,
    req: web::Json<CreateContentRequest<K>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CreateContentRequest {
        data: fields,
        translations,
    } = req.into_inner();

    match K::use_cases(&data).create.execute(fields, translations).await {
        Ok(record) => {
            info!(staff_id = %staff.user_id, id = %record.id, "{} entry created", K::NAME);
            ApiResponse::created(ContentResponse::new(
                record,
                data.languages.default_language(),
            ))
        }

        Err(CreateContentError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreateContentError::RepositoryError(e)) => {
            error!("Failed to create {} entry: {}", K::KIND, e);
            ApiResponse::internal_error()
        }
    }
}
