//! Create `book` table with FK to `seller`.
//!
//! ON DELETE CASCADE makes seller deletion remove owned books inside the
//! store, so no orphaned book can survive a concurrent delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(uuid(Book::Id).primary_key())
                    .col(string_len(Book::Title, 50).not_null())
                    .col(string_len(Book::Author, 100).not_null())
                    .col(integer(Book::Year).not_null())
                    .col(integer(Book::CountPages).not_null())
                    .col(uuid(Book::SellerId).not_null())
                    .col(timestamp_with_time_zone(Book::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Book::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_seller")
                            .from(Book::Table, Book::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Book::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Book { Table, Id, Title, Author, Year, CountPages, SellerId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Seller { Table, Id }
