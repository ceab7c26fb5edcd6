pub mod delete_contact_message;
pub mod get_contact_message;
pub mod list_contact_messages;
pub mod submit_contact_message;

pub use delete_contact_message::{DeleteContactMessageError, DeleteContactMessageUseCase};
pub use get_contact_message::{GetContactMessageError, GetContactMessageUseCase};
pub use list_contact_messages::{ListContactMessagesError, ListContactMessagesUseCase};
pub use submit_contact_message::{
    ContactSubmissionOutcome, SubmitContactMessageError, SubmitContactMessageUseCase,
};
