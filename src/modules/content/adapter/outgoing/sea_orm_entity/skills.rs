use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub proficiency: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::skill_translations::Entity")]
    SkillTranslations,
}

impl Related<super::skill_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
