use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hobby_translations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub master_id: Uuid,
    pub language_code: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hobbies::Entity",
        from = "Column::MasterId",
        to = "super::hobbies::Column::Id",
        on_delete = "Cascade"
    )]
    Hobby,
}

impl Related<super::hobbies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hobby.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
