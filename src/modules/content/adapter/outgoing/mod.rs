pub mod content_repository_postgres;
pub mod sea_orm_entity;
pub mod tables;

pub use content_repository_postgres::ContentRepositoryPostgres;
pub use tables::ContentTable;
