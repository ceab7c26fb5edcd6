use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_staff::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token (short-lived)
    access_token: String,

    /// JWT refresh token (long-lived)
    refresh_token: String,

    user: LoginStaffInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginStaffInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "admin")]
    username: String,

    #[schema(example = "admin@example.com")]
    email: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Staff login
///
/// Exchanges a username and password for an access and a refresh token.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account is not staff", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_staff_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "Staff user logged in");

            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                user: LoginStaffInfo {
                    id: response.user.id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                },
            })
        }
        Err(e) => map_login_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_login_error(e: LoginError) -> actix_web::HttpResponse {
    match e {
        LoginError::InvalidCredentials => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        LoginError::NotStaff => {
            warn!("Login failed: account is not staff");
            ApiResponse::forbidden("STAFF_ONLY", "Staff access required")
        }
        LoginError::PasswordVerificationFailed(e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        LoginError::QueryError(e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
