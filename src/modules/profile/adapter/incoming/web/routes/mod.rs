mod create_profile;
mod get_profile;
mod profile_translation;
mod update_profile;

use serde::Serialize;

use crate::modules::profile::application::domain::entities::Profile;

pub use create_profile::{create_profile_handler, CreateProfileRequest};
pub use get_profile::get_profile_handler;
pub use profile_translation::{remove_profile_translation_handler, upsert_profile_translation_handler};
pub use update_profile::update_profile_handler;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub label: &'static str,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            label: profile.label(),
            profile,
        }
    }
}
