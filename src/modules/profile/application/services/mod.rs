pub mod create_profile_service;
pub mod load_profile_service;
pub mod remove_profile_translation_service;
pub mod update_profile_service;
pub mod upsert_profile_translation_service;

pub use create_profile_service::CreateProfileService;
pub use load_profile_service::LoadProfileService;
pub use remove_profile_translation_service::RemoveProfileTranslationService;
pub use update_profile_service::UpdateProfileService;
pub use upsert_profile_translation_service::UpsertProfileTranslationService;
