use sea_orm::entity::prelude::*;

/// Singleton row; the database only accepts `id = 1`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub github_url: String,
    #[sea_orm(column_type = "Text")]
    pub linkedin_url: String,
    #[sea_orm(column_type = "Text")]
    pub twitter_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
