use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "constructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::result::Entity")]
    RaceResult,
    #[sea_orm(has_many = "super::qualifying::Entity")]
    Qualifying,
}

impl Related<super::result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceResult.def()
    }
}

impl Related<super::qualifying::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Qualifying.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
