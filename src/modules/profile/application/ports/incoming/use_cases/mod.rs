pub mod create_profile;
pub mod load_profile;
pub mod remove_profile_translation;
pub mod update_profile;
pub mod upsert_profile_translation;

pub use create_profile::{CreateProfileError, CreateProfileUseCase};
pub use load_profile::{LoadProfileError, LoadProfileUseCase};
pub use remove_profile_translation::{
    RemoveProfileTranslationError, RemoveProfileTranslationUseCase,
};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
pub use upsert_profile_translation::{
    UpsertProfileTranslationError, UpsertProfileTranslationUseCase,
};
