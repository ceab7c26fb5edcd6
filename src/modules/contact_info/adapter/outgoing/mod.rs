pub mod contact_info_repository_postgres;
pub mod sea_orm_entity;

pub use contact_info_repository_postgres::ContactInfoRepositoryPostgres;
