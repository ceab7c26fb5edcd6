pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_staff_users_table;
mod m20250301_000002_create_profile_tables;
mod m20250301_000003_create_contact_info_table;
mod m20250301_000004_create_skill_tables;
mod m20250301_000005_create_project_tables;
mod m20250301_000006_create_experience_tables;
mod m20250301_000007_create_education_tables;
mod m20250301_000008_create_hobby_tables;
mod m20250301_000009_create_contact_messages_table;
mod m20250301_000010_create_testimonials_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_staff_users_table::Migration),
            Box::new(m20250301_000002_create_profile_tables::Migration),
            Box::new(m20250301_000003_create_contact_info_table::Migration),
            Box::new(m20250301_000004_create_skill_tables::Migration),
            Box::new(m20250301_000005_create_project_tables::Migration),
            Box::new(m20250301_000006_create_experience_tables::Migration),
            Box::new(m20250301_000007_create_education_tables::Migration),
            Box::new(m20250301_000008_create_hobby_tables::Migration),
            Box::new(m20250301_000009_create_contact_messages_table::Migration),
            Box::new(m20250301_000010_create_testimonials_table::Migration),
        ]
    }
}
