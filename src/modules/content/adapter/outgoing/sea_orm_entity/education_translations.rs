use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "education_translations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub master_id: Uuid,
    pub language_code: String,
    pub degree: String,
    pub institution: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::educations::Entity",
        from = "Column::MasterId",
        to = "super::educations::Column::Id",
        on_delete = "Cascade"
    )]
    Education,
}

impl Related<super::educations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Education.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
