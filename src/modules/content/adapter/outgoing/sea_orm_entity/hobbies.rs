use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hobbies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub icon: Option<String>,
    pub font_awesome_icon: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hobby_translations::Entity")]
    HobbyTranslations,
}

impl Related<super::hobby_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HobbyTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
