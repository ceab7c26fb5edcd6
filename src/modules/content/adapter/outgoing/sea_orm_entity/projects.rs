use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub code_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub demo_link: Option<String>,
    pub created_date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_translations::Entity")]
    ProjectTranslations,
}

impl Related<super::project_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
