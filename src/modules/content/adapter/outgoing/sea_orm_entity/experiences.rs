use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub icon: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experience_translations::Entity")]
    ExperienceTranslations,
}

impl Related<super::experience_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
