pub mod create_contact_info_service;
pub mod load_contact_info_service;
pub mod update_contact_info_service;

pub use create_contact_info_service::CreateContactInfoService;
pub use load_contact_info_service::LoadContactInfoService;
pub use update_contact_info_service::UpdateContactInfoService;
