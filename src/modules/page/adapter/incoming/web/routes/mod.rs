pub mod home_page;
pub mod redirect_to_default_language;
pub mod submit_page_form;

pub use home_page::home_page_handler;
pub use redirect_to_default_language::redirect_to_default_language_handler;
pub use submit_page_form::submit_page_form_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::page::application::ports::incoming::use_cases::RenderHomePageError;
use crate::shared::api::ApiResponse;

pub(crate) fn language_not_supported() -> HttpResponse {
    ApiResponse::not_found("LANGUAGE_NOT_SUPPORTED", "Language not supported")
}

pub(crate) fn render_failed(e: RenderHomePageError) -> HttpResponse {
    match e {
        RenderHomePageError::LanguageNotSupported(_) => language_not_supported(),
        RenderHomePageError::SectionFailed { section, message } => {
            error!(section, "Failed to assemble home page: {}", message);
            ApiResponse::internal_error()
        }
    }
}
