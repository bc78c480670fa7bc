//! Create `seller` table.
//!
//! Email carries the store-level uniqueness constraint; the password hash
//! column is write-only from the API's perspective.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(uuid(Seller::Id).primary_key())
                    .col(string_len(Seller::FirstName, 128).not_null())
                    .col(string_len(Seller::LastName, 128).not_null())
                    .col(string_len(Seller::Email, 255).unique_key().not_null())
                    .col(string_len(Seller::PasswordHash, 255).not_null())
                    .col(timestamp_with_time_zone(Seller::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Seller::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Seller::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Seller { Table, Id, FirstName, LastName, Email, PasswordHash, CreatedAt, UpdatedAt }
