pub mod delete_contact_message_service;
pub mod get_contact_message_service;
pub mod list_contact_messages_service;
pub mod submit_contact_message_service;

pub use delete_contact_message_service::DeleteContactMessageService;
pub use get_contact_message_service::GetContactMessageService;
pub use list_contact_messages_service::ListContactMessagesService;
pub use submit_contact_message_service::SubmitContactMessageService;
