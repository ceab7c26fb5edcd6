use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewStaffUser, StaffUser};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaffUserRepositoryError {
    #[error("Staff user already exists")]
    UserAlreadyExists,

    #[error("Staff user not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StaffUserRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StaffUser>, StaffUserRepositoryError>;

    async fn find_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StaffUser>, StaffUserRepositoryError>;

    async fn create(&self, user: NewStaffUser) -> Result<StaffUser, StaffUserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), StaffUserRepositoryError>;
}
