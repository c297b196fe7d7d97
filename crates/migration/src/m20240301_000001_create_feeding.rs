//! Create `feeding` table.
//! The primary key is store-generated; every other column belongs to the record body.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feeding::Table)
                    .if_not_exists()
                    .col(pk_auto(Feeding::Id))
                    .col(string_len(Feeding::Name, 128))
                    .col(integer_null(Feeding::QuantityGrams))
                    .col(text_null(Feeding::Notes))
                    .col(timestamp_with_time_zone_null(Feeding::FedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Feeding::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Feeding {
    Table,
    Id,
    Name,
    QuantityGrams,
    Notes,
    FedAt,
}
