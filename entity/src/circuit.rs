use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "circuits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::race::Entity")]
    Race,
}

impl Related<super::race::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
