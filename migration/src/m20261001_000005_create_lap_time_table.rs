use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_race_table::Race, m20261001_000003_create_driver_table::Driver,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LapTime::Table)
                    .if_not_exists()
                    .col(integer(LapTime::RaceId))
                    .col(integer(LapTime::DriverId))
                    .col(integer(LapTime::Lap))
                    .col(string_null(LapTime::Position))
                    .col(string_null(LapTime::Time))
                    .col(big_integer(LapTime::Milliseconds))
                    .primary_key(
                        Index::create()
                            .col(LapTime::RaceId)
                            .col(LapTime::DriverId)
                            .col(LapTime::Lap),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lap_time_race_id")
                            .from(LapTime::Table, LapTime::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lap_time_driver_id")
                            .from(LapTime::Table, LapTime::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lap_time_race_milliseconds")
                    .table(LapTime::Table)
                    .col(LapTime::RaceId)
                    .col(LapTime::Milliseconds)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LapTime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LapTime {
    #[sea_orm(iden = "lap_times")]
    Table,
    RaceId,
    DriverId,
    Lap,
    Position,
    Time,
    Milliseconds,
}
