pub mod create_content_service;
pub mod delete_content_service;
pub mod get_content_service;
pub mod list_content_service;
pub mod remove_content_translation_service;
pub mod update_content_service;
pub mod upsert_content_translation_service;

pub use create_content_service::CreateContentService;
pub use delete_content_service::DeleteContentService;
pub use get_content_service::GetContentService;
pub use list_content_service::ListContentService;
pub use remove_content_translation_service::RemoveContentTranslationService;
pub use update_content_service::UpdateContentService;
pub use upsert_content_translation_service::UpsertContentTranslationService;
