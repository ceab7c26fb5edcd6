use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a token may be used for. Serialized into the `typ` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is not yet valid")]
    NotYetValid,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    Malformed,

    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// JWT claims carried by admin tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    #[serde(rename = "typ")]
    pub kind: TokenKind,
    pub is_staff: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub trait TokenProvider: Send + Sync {
    fn issue(&self, kind: TokenKind, user_id: Uuid, is_staff: bool) -> Result<String, TokenError>;

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn issue_pair(&self, user_id: Uuid, is_staff: bool) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue(TokenKind::Access, user_id, is_staff)?,
            refresh_token: self.issue(TokenKind::Refresh, user_id, is_staff)?,
        })
    }
}
