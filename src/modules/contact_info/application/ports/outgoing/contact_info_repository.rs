use async_trait::async_trait;

use crate::modules::contact_info::application::domain::entities::ContactInfo;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactInfoRepositoryError {
    #[error("Contact info already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactInfoRepository: Send + Sync {
    /// Returns the row, creating it from `defaults` on first access. A stored
    /// row with an empty email gets `defaults.email`.
    async fn load_or_init(&self, defaults: ContactInfo)
        -> Result<ContactInfo, ContactInfoRepositoryError>;

    /// Fails with `AlreadyExists` when the singleton row is present.
    async fn create(&self, info: ContactInfo) -> Result<ContactInfo, ContactInfoRepositoryError>;

    /// Replaces every field, creating the row if needed.
    async fn update(&self, info: ContactInfo) -> Result<ContactInfo, ContactInfoRepositoryError>;
}
