use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string(Driver::Forename))
                    .col(string(Driver::Surname))
                    .col(string_null(Driver::Code))
                    .col(string_null(Driver::Nationality))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    #[sea_orm(iden = "drivers")]
    Table,
    Id,
    Forename,
    Surname,
    Code,
    Nationality,
}
