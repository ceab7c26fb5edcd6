// src/api/schemas.rs
//! Documentation mirrors of the envelopes built by `shared::api::ApiResponse`.
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "INVALID_CREDENTIALS")]
    pub code: String,

    #[schema(example = "Invalid username or password")]
    pub message: String,

    /// Field errors keyed by field name, present on validation failures
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}
