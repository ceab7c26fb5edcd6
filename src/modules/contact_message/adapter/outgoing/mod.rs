pub mod contact_message_repository_postgres;
pub mod sea_orm_entity;

pub use contact_message_repository_postgres::ContactMessageRepositoryPostgres;
