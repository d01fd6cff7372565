use sea_orm::entity::prelude::*;

/// One lap completed by one driver in one race.
///
/// `position` is raw text because the source data uses `\N` for laps where the
/// running order was not recorded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lap_times")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub race_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub driver_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub lap: i32,
    pub position: Option<String>,
    pub time: Option<String>,
    pub milliseconds: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::race::Entity",
        from = "Column::RaceId",
        to = "super::race::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Race,
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Driver,
}

impl Related<super::race::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
