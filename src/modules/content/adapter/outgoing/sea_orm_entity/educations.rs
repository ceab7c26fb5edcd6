use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::education_translations::Entity")]
    EducationTranslations,
}

impl Related<super::education_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EducationTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
