// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use crate::shared::config::SubmissionLimits;
use actix_web::web::{FormConfig, JsonConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_form_config(limits: &SubmissionLimits) -> FormConfig {
    FormConfig::default()
        .limit(limits.form_body_limit())
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_FORM_BODY", &message),
            )
            .into()
        })
}
