use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Constructor::Table)
                    .if_not_exists()
                    .col(pk_auto(Constructor::Id))
                    .col(string(Constructor::Name))
                    .col(string_null(Constructor::Nationality))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Constructor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Constructor {
    #[sea_orm(iden = "constructors")]
    Table,
    Id,
    Name,
    Nationality,
}
