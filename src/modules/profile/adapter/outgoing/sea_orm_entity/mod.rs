pub mod profile;
pub mod profile_translations;
