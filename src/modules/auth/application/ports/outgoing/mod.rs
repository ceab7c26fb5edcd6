pub mod password_hasher;
pub mod staff_user_repository;
pub mod token_provider;

pub use password_hasher::{HashError, PasswordHasher};
pub use staff_user_repository::{StaffUserRepository, StaffUserRepositoryError};
pub use token_provider::{TokenClaims, TokenError, TokenKind, TokenPair, TokenProvider};
