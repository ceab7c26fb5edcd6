use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::{TokenKind, TokenProvider};

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "portfolio-test".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// Token provider as the auth extractors look it up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for a staff user.
pub fn staff_bearer() -> String {
    let token = test_jwt_service()
        .issue(TokenKind::Access, Uuid::new_v4(), true)
        .unwrap();
    format!("Bearer {}", token)
}

/// `Authorization` header value for an authenticated, non-staff user.
pub fn non_staff_bearer() -> String {
    let token = test_jwt_service()
        .issue(TokenKind::Access, Uuid::new_v4(), false)
        .unwrap();
    format!("Bearer {}", token)
}
