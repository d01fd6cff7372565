use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "qualifying")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub race_id: i32,
    pub driver_id: i32,
    pub constructor_id: i32,
    pub position: Option<i32>,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::constructor::Entity",
        from = "Column::ConstructorId",
        to = "super::constructor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Constructor,
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

impl Related<super::constructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Constructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
