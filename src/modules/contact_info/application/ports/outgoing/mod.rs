pub mod contact_info_repository;

pub use contact_info_repository::{ContactInfoRepository, ContactInfoRepositoryError};
