use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_race_table::Race, m20261001_000003_create_driver_table::Driver,
    m20261001_000004_create_constructor_table::Constructor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaceResult::Table)
                    .if_not_exists()
                    .col(pk_auto(RaceResult::Id))
                    .col(integer(RaceResult::RaceId))
                    .col(integer(RaceResult::DriverId))
                    .col(integer(RaceResult::ConstructorId))
                    .col(integer_null(RaceResult::Grid))
                    .col(string_null(RaceResult::Position))
                    .col(string_null(RaceResult::Time))
                    .col(string_null(RaceResult::Milliseconds))
                    .col(double_null(RaceResult::Points))
                    .col(integer_null(RaceResult::Laps))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_race_id")
                            .from(RaceResult::Table, RaceResult::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_driver_id")
                            .from(RaceResult::Table, RaceResult::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_constructor_id")
                            .from(RaceResult::Table, RaceResult::ConstructorId)
                            .to(Constructor::Table, Constructor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RaceResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaceResult {
    #[sea_orm(iden = "results")]
    Table,
    Id,
    RaceId,
    DriverId,
    ConstructorId,
    Grid,
    Position,
    Time,
    Milliseconds,
    Points,
    Laps,
}
