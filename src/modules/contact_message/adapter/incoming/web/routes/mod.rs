mod delete_contact_message;
mod get_contact_message;
mod list_contact_messages;

use serde::Serialize;

use crate::modules::contact_message::application::domain::entities::ContactMessage;

pub use delete_contact_message::delete_contact_message_handler;
pub use get_contact_message::get_contact_message_handler;
pub use list_contact_messages::list_contact_messages_handler;

#[derive(Debug, Serialize)]
pub struct ContactMessageResponse {
    #[serde(flatten)]
    pub message: ContactMessage,
    pub label: String,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            label: message.label(),
            message,
        }
    }
}
