use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Circuit::Table)
                    .if_not_exists()
                    .col(pk_auto(Circuit::Id))
                    .col(string(Circuit::Name))
                    .col(string_null(Circuit::Location))
                    .col(string_null(Circuit::Country))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Circuit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Circuit {
    #[sea_orm(iden = "circuits")]
    Table,
    Id,
    Name,
    Location,
    Country,
}
