use sea_orm::entity::prelude::*;

/// Singleton row; the database only accepts `id = 1`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub profile_picture: Option<String>,
    pub resume: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::profile_translations::Entity")]
    ProfileTranslations,
}

impl Related<super::profile_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
