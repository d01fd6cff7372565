use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_circuit_table::Circuit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Race::Table)
                    .if_not_exists()
                    .col(pk_auto(Race::Id))
                    .col(integer(Race::Year))
                    .col(integer(Race::Round))
                    .col(integer(Race::CircuitId))
                    .col(string(Race::Name))
                    .col(date_null(Race::Date))
                    .col(string_null(Race::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_circuit_id")
                            .from(Race::Table, Race::CircuitId)
                            .to(Circuit::Table, Circuit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Race::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Race {
    #[sea_orm(iden = "races")]
    Table,
    Id,
    Year,
    Round,
    CircuitId,
    Name,
    Date,
    Url,
}
