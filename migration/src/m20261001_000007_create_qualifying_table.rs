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
                    .table(Qualifying::Table)
                    .if_not_exists()
                    .col(pk_auto(Qualifying::Id))
                    .col(integer(Qualifying::RaceId))
                    .col(integer(Qualifying::DriverId))
                    .col(integer(Qualifying::ConstructorId))
                    .col(integer_null(Qualifying::Position))
                    .col(string_null(Qualifying::Q1))
                    .col(string_null(Qualifying::Q2))
                    .col(string_null(Qualifying::Q3))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qualifying_race_id")
                            .from(Qualifying::Table, Qualifying::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qualifying_driver_id")
                            .from(Qualifying::Table, Qualifying::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qualifying_constructor_id")
                            .from(Qualifying::Table, Qualifying::ConstructorId)
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
            .drop_table(Table::drop().table(Qualifying::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Qualifying {
    #[sea_orm(iden = "qualifying")]
    Table,
    Id,
    RaceId,
    DriverId,
    ConstructorId,
    Position,
    Q1,
    Q2,
    Q3,
}
