use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub forename: String,
    pub surname: String,
    pub code: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lap_time::Entity")]
    LapTime,
    #[sea_orm(has_many = "super::result::Entity")]
    RaceResult,
    #[sea_orm(has_many = "super::qualifying::Entity")]
    Qualifying,
}

impl Related<super::lap_time::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LapTime.def()
    }
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
