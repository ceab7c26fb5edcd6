use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::NewStaffUser;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, StaffUserRepository, StaffUserRepositoryError,
};
use crate::shared::config::AdminBootstrap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureAdminOutcome {
    Created,
    PasswordUpdated,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnsureAdminError {
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("repository error: {0}")]
    Repository(String),
}

/// Creates the configured administrator, or brings its password in line
/// with the configured one.
#[async_trait]
pub trait IEnsureAdminUseCase: Send + Sync {
    async fn execute(&self, admin: &AdminBootstrap)
        -> Result<EnsureAdminOutcome, EnsureAdminError>;
}

pub struct EnsureAdminUseCase<R>
where
    R: StaffUserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> EnsureAdminUseCase<R>
where
    R: StaffUserRepository,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IEnsureAdminUseCase for EnsureAdminUseCase<R>
where
    R: StaffUserRepository + Send + Sync,
{
    async fn execute(
        &self,
        admin: &AdminBootstrap,
    ) -> Result<EnsureAdminOutcome, EnsureAdminError> {
        let existing = self
            .repository
            .find_by_username(&admin.username)
            .await
            .map_err(|e| EnsureAdminError::Repository(e.to_string()))?;

        match existing {
            None => {
                let password_hash = self
                    .password_hasher
                    .hash_password(&admin.password)
                    .await
                    .map_err(|e| EnsureAdminError::Hashing(e.to_string()))?;

                match self
                    .repository
                    .create(NewStaffUser {
                        username: admin.username.clone(),
                        email: admin.email.clone(),
                        password_hash,
                    })
                    .await
                {
                    Ok(_) => {
                        info!("Staff user '{}' created", admin.username);
                        Ok(EnsureAdminOutcome::Created)
                    }
                    // Another instance won the race
                    Err(StaffUserRepositoryError::UserAlreadyExists) => {
                        Ok(EnsureAdminOutcome::Unchanged)
                    }
                    Err(e) => Err(EnsureAdminError::Repository(e.to_string())),
                }
            }
            Some(user) => {
                let matches = self
                    .password_hasher
                    .verify_password(&admin.password, &user.password_hash)
                    .await
                    .unwrap_or(false);

                if matches {
                    info!("Staff user '{}' password unchanged", admin.username);
                    return Ok(EnsureAdminOutcome::Unchanged);
                }

                let password_hash = self
                    .password_hasher
                    .hash_password(&admin.password)
                    .await
                    .map_err(|e| EnsureAdminError::Hashing(e.to_string()))?;

                self.repository
                    .update_password(user.id, password_hash)
                    .await
                    .map_err(|e| EnsureAdminError::Repository(e.to_string()))?;

                info!(
                    "Staff user '{}' password updated from configuration",
                    admin.username
                );
                Ok(EnsureAdminOutcome::PasswordUpdated)
            }
        }
    }
}
