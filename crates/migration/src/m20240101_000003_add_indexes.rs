use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Book: index on seller_id for owner lookups and cascade planning
        manager
            .create_index(
                Index::create()
                    .name("idx_book_seller")
                    .table(Book::Table)
                    .col(Book::SellerId)
                    .to_owned(),
            )
            .await?;

        // Listings are served in insertion order
        manager
            .create_index(
                Index::create()
                    .name("idx_seller_created_at")
                    .table(Seller::Table)
                    .col(Seller::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_book_created_at")
                    .table(Book::Table)
                    .col(Book::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_book_seller").table(Book::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_seller_created_at").table(Seller::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_book_created_at").table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Seller { Table, CreatedAt }

#[derive(DeriveIden)]
enum Book { Table, SellerId, CreatedAt }
