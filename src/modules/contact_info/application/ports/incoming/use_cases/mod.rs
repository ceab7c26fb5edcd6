pub mod create_contact_info;
pub mod load_contact_info;
pub mod update_contact_info;

pub use create_contact_info::{CreateContactInfoError, CreateContactInfoUseCase};
pub use load_contact_info::{LoadContactInfoError, LoadContactInfoUseCase};
pub use update_contact_info::{UpdateContactInfoError, UpdateContactInfoUseCase};
