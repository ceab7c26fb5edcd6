use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileFields};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, fields: ProfileFields) -> Result<Profile, UpdateProfileError> {
        let fields = fields.normalized();
        let errors = fields.validate();
        if !errors.is_empty() {
            return Err(UpdateProfileError::Validation(errors));
        }

        self.repository
            .update(fields)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::InMemoryProfileRepository;

    #[tokio::test]
    async fn test_update_replaces_universal_fields() {
        let repo = InMemoryProfileRepository::default();
        let service = UpdateProfileService::new(repo);

        let profile = service
            .execute(ProfileFields {
                profile_picture: Some("profile/abc.png".to_string()),
                resume: Some(" ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(profile.profile_picture.as_deref(), Some("profile/abc.png"));
        assert_eq!(profile.resume, None);
    }

    #[tokio::test]
    async fn test_overlong_path_is_rejected() {
        let service = UpdateProfileService::new(InMemoryProfileRepository::default());

        let err = service
            .execute(ProfileFields {
                profile_picture: Some("x".repeat(300)),
                resume: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateProfileError::Validation(e) if e.contains("profile_picture")));
    }
}
