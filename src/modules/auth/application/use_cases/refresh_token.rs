use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::{
    StaffUserRepository, TokenError, TokenKind, TokenPair, TokenProvider,
};

/// A non-blank refresh token, trimmed.
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("refresh token has expired")]
    TokenExpired,

    #[error("invalid refresh token")]
    TokenInvalid,

    #[error("token is not yet valid")]
    TokenNotYetValid,

    #[error("not a refresh token")]
    InvalidTokenType,

    #[error("token does not belong to a staff user")]
    NotStaff,

    #[error("token subject no longer exists")]
    UnknownUser,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => Self::TokenExpired,
            TokenError::NotYetValid => Self::TokenNotYetValid,
            TokenError::InvalidSignature | TokenError::Malformed => Self::TokenInvalid,
            TokenError::Encoding(msg) => Self::TokenGenerationFailed(msg),
        }
    }
}

/// Both tokens are reissued; the old refresh token stays valid until it expires.
pub type RefreshTokenResponse = TokenPair;

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// Staff status is read from storage on every refresh, so demoting or
/// deleting a user ends their session once the access token expires.
#[derive(Clone)]
pub struct RefreshTokenUseCase<R>
where
    R: StaffUserRepository,
{
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RefreshTokenUseCase<R>
where
    R: StaffUserRepository,
{
    pub fn new(repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRefreshTokenUseCase for RefreshTokenUseCase<R>
where
    R: StaffUserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self.token_provider.verify(request.refresh_token())?;

        if claims.kind != TokenKind::Refresh {
            return Err(RefreshTokenError::InvalidTokenType);
        }
        if !claims.is_staff {
            return Err(RefreshTokenError::NotStaff);
        }

        let user = self
            .repository
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or(RefreshTokenError::UnknownUser)?;

        if !user.is_staff {
            return Err(RefreshTokenError::NotStaff);
        }

        Ok(self.token_provider.issue_pair(user.id, user.is_staff)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::test_jwt_service;
    use crate::tests::support::stubs::InMemoryStaffUserRepository;
    use uuid::Uuid;

    fn use_case() -> RefreshTokenUseCase<InMemoryStaffUserRepository> {
        use_case_with(InMemoryStaffUserRepository::default())
    }

    fn use_case_with(
        repo: InMemoryStaffUserRepository,
    ) -> RefreshTokenUseCase<InMemoryStaffUserRepository> {
        RefreshTokenUseCase::new(repo, Arc::new(test_jwt_service()))
    }

    async fn stored_id(repo: &InMemoryStaffUserRepository, username: &str) -> Uuid {
        repo.find_by_username(username).await.unwrap().unwrap().id
    }

    fn request(token: String) -> RefreshTokenRequest {
        RefreshTokenRequest::new(token).unwrap()
    }

    #[test]
    fn test_request_rejects_blank_token() {
        assert_eq!(
            RefreshTokenRequest::new("   ".to_string()).unwrap_err(),
            RefreshTokenRequestError::EmptyToken
        );
    }

    #[test]
    fn test_request_trims_token() {
        assert_eq!(request(" abc ".to_string()).refresh_token(), "abc");
    }

    #[tokio::test]
    async fn test_refresh_issues_new_pair_for_same_user() {
        let jwt = test_jwt_service();
        let repo = InMemoryStaffUserRepository::default().with_user("admin", "hash", true);
        let user_id = stored_id(&repo, "admin").await;
        let refresh = jwt.issue(TokenKind::Refresh, user_id, true).unwrap();

        let pair = use_case_with(repo).execute(request(refresh)).await.unwrap();

        let access = jwt.verify(&pair.access_token).unwrap();
        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(access.sub, user_id);
        assert_eq!(jwt.verify(&pair.refresh_token).unwrap().kind, TokenKind::Refresh);
    }

    #[tokio::test]
    async fn test_access_token_is_wrong_type() {
        let access = test_jwt_service()
            .issue(TokenKind::Access, Uuid::new_v4(), true)
            .unwrap();

        let err = use_case().execute(request(access)).await.unwrap_err();

        assert_eq!(err, RefreshTokenError::InvalidTokenType);
    }

    #[tokio::test]
    async fn test_non_staff_token_is_refused() {
        let refresh = test_jwt_service()
            .issue(TokenKind::Refresh, Uuid::new_v4(), false)
            .unwrap();

        let err = use_case().execute(request(refresh)).await.unwrap_err();

        assert_eq!(err, RefreshTokenError::NotStaff);
    }

    #[tokio::test]
    async fn test_garbage_token_is_invalid() {
        let err = use_case()
            .execute(request("garbage".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err, RefreshTokenError::TokenInvalid);
    }

    #[tokio::test]
    async fn test_demoted_user_cannot_refresh() {
        let repo = InMemoryStaffUserRepository::default().with_user("former", "hash", false);
        let user_id = stored_id(&repo, "former").await;
        let refresh = test_jwt_service()
            .issue(TokenKind::Refresh, user_id, true)
            .unwrap();

        let err = use_case_with(repo).execute(request(refresh)).await.unwrap_err();

        assert_eq!(err, RefreshTokenError::NotStaff);
    }

    #[tokio::test]
    async fn test_deleted_user_cannot_refresh() {
        let refresh = test_jwt_service()
            .issue(TokenKind::Refresh, Uuid::new_v4(), true)
            .unwrap();

        let err = use_case().execute(request(refresh)).await.unwrap_err();

        assert_eq!(err, RefreshTokenError::UnknownUser);
    }
}
