mod contact_info;

use serde::Serialize;

use crate::modules::contact_info::application::domain::entities::ContactInfo;

pub use contact_info::{
    create_contact_info_handler, get_contact_info_handler, update_contact_info_handler,
};

#[derive(Debug, Serialize)]
pub struct ContactInfoResponse {
    #[serde(flatten)]
    pub info: ContactInfo,
    pub label: &'static str,
}

impl From<ContactInfo> for ContactInfoResponse {
    fn from(info: ContactInfo) -> Self {
        Self {
            label: info.label(),
            info,
        }
    }
}
