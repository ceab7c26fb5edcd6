pub mod create_content;
pub mod delete_content;
pub mod get_content;
pub mod list_content;
pub mod remove_content_translation;
pub mod update_content;
pub mod upsert_content_translation;

pub use create_content::{CreateContentError, CreateContentUseCase};
pub use delete_content::{DeleteContentError, DeleteContentUseCase};
pub use get_content::{GetContentError, GetContentUseCase};
pub use list_content::{ListContentError, ListContentUseCase};
pub use remove_content_translation::{
    RemoveContentTranslationError, RemoveContentTranslationUseCase,
};
pub use update_content::{UpdateContentError, UpdateContentUseCase};
pub use upsert_content_translation::{
    UpsertContentTranslationError, UpsertContentTranslationUseCase,
};
