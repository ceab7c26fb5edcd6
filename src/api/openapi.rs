use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginStaffInfo, RefreshTokenRequestDto,
    RefreshTokenResponseBody,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Staff authentication for the portfolio administration API",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::modules::auth::adapter::incoming::web::routes::login_staff::login_staff_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
    ),
    components(
        schemas(
            SuccessResponse<LoginResponse>,
            ErrorResponse,
            ErrorDetail,
            LoginRequestDto,
            LoginResponse,
            LoginStaffInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Staff authentication endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Staff access token"))
                        .build(),
                ),
            )
        }
    }
}
