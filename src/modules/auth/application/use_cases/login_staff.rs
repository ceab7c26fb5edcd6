use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, StaffUserRepository, TokenProvider,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }
        // Passwords are compared as typed; only reject an empty one
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is not allowed to use the admin")]
    NotStaff,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct StaffInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginStaffResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: StaffInfo,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginStaffUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginStaffResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginStaffUseCase<R>
where
    R: StaffUserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LoginStaffUseCase<R>
where
    R: StaffUserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILoginStaffUseCase for LoginStaffUseCase<R>
where
    R: StaffUserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginStaffResponse, LoginError> {
        let user = self
            .repository
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // Checked after the password so the response does not reveal which accounts exist
        if !user.is_staff {
            return Err(LoginError::NotStaff);
        }

        let tokens = self
            .token_provider
            .issue_pair(user.id, user.is_staff)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginStaffResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: StaffInfo {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        })
    }
}
