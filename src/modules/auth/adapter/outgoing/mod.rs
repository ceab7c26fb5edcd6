pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod staff_user_repository_postgres;

pub use staff_user_repository_postgres::StaffUserRepositoryPostgres;
