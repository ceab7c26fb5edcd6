use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    access_token: String,
    refresh_token: String,
}

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/admin/token/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New token pair", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 400, description = "Empty or wrong kind of token", body = ErrorResponse),
        (status = 401, description = "Expired or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/admin/token/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!("Token refresh attempt");

    match data.auth.refresh_token.execute(request).await {
        Ok(response) => ApiResponse::success(RefreshTokenResponseBody {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }),
        Err(e) => map_refresh_error(e),
    }
}

fn map_refresh_error(e: RefreshTokenError) -> HttpResponse {
    match e {
        RefreshTokenError::TokenExpired => {
            warn!("Token refresh failed: Token expired");
            ApiResponse::unauthorized(
                "TOKEN_EXPIRED",
                "Refresh token has expired. Please login again.",
            )
        }
        RefreshTokenError::TokenInvalid => {
            warn!("Token refresh failed: Invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
        RefreshTokenError::UnknownUser => {
            warn!("Token refresh failed: user no longer exists");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
        RefreshTokenError::NotStaff => {
            warn!("Token refresh failed: not a staff token");
            ApiResponse::forbidden("STAFF_ONLY", "Staff access required")
        }
        RefreshTokenError::InvalidTokenType => ApiResponse::bad_request(
            "INVALID_TOKEN_TYPE",
            "Invalid token type. Please use a refresh token.",
        ),
        RefreshTokenError::TokenNotYetValid => {
            ApiResponse::bad_request("TOKEN_NOT_YET_VALID", "Token is not yet valid")
        }
        RefreshTokenError::QueryError(e) => {
            error!(error = %e, "Staff lookup failed during refresh");
            ApiResponse::internal_error()
        }
        RefreshTokenError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
