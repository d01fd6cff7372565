use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "races")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: i32,
    pub round: i32,
    pub circuit_id: i32,
    pub name: String,
    pub date: Option<Date>,
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::circuit::Entity",
        from = "Column::CircuitId",
        to = "super::circuit::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Circuit,
    #[sea_orm(has_many = "super::lap_time::Entity")]
    LapTime,
    #[sea_orm(has_many = "super::result::Entity")]
    RaceResult,
    #[sea_orm(has_many = "super::qualifying::Entity")]
    Qualifying,
}

impl Related<super::circuit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Circuit.def()
    }
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
