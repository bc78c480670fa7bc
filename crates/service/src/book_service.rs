use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use models::book;

use crate::domain::{BookPublic, BookUpdate, NewBook};
use crate::errors::ServiceError;

/// Create a book owned by an existing seller. A dangling `seller_id` is the
/// store's FK violation, translated to `SellerNotFound`; nothing persists.
#[instrument(skip(db, input), fields(seller_id = %input.seller_id))]
pub async fn create(db: &DatabaseConnection, input: NewBook) -> Result<BookPublic, ServiceError> {
    book::validate_title(&input.title)?;
    book::validate_author(&input.author)?;
    book::validate_year(input.year)?;
    book::validate_count_pages(input.count_pages)?;

    let created = book::create(
        db,
        &input.title,
        &input.author,
        input.year,
        input.count_pages,
        input.seller_id,
    )
    .await
    .map_err(ServiceError::from_db_err)?;

    info!(book_id = %created.id, seller_id = %created.seller_id, "book_created");
    Ok(BookPublic::from(created))
}

/// List all books across all sellers in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<BookPublic>, ServiceError> {
    let books = book::Entity::find()
        .order_by_asc(book::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db_err)?;
    Ok(books.into_iter().map(BookPublic::from).collect())
}

/// Get a book by id.
pub async fn get(db: &DatabaseConnection, book_id: Uuid) -> Result<BookPublic, ServiceError> {
    let found = book::Entity::find_by_id(book_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db_err)?
        .ok_or_else(|| ServiceError::not_found("book"))?;
    Ok(BookPublic::from(found))
}

/// Partial in-place update; a changed `seller_id` is re-validated by the
/// store's FK on write.
#[instrument(skip(db, patch))]
pub async fn update(
    db: &DatabaseConnection,
    book_id: Uuid,
    patch: BookUpdate,
) -> Result<BookPublic, ServiceError> {
    let txn = db.begin().await.map_err(ServiceError::from_db_err)?;

    let found = book::Entity::find_by_id(book_id)
        .one(&txn)
        .await
        .map_err(ServiceError::from_db_err)?
        .ok_or_else(|| ServiceError::not_found("book"))?;
    let mut am: book::ActiveModel = found.into();

    if let Some(title) = patch.title {
        book::validate_title(&title)?;
        am.title = Set(title);
    }
    if let Some(author) = patch.author {
        book::validate_author(&author)?;
        am.author = Set(author);
    }
    if let Some(year) = patch.year {
        book::validate_year(year)?;
        am.year = Set(year);
    }
    if let Some(count_pages) = patch.count_pages {
        book::validate_count_pages(count_pages)?;
        am.count_pages = Set(count_pages);
    }
    if let Some(seller_id) = patch.seller_id {
        am.seller_id = Set(seller_id);
    }
    am.updated_at = Set(Utc::now().into());

    let updated = am.update(&txn).await.map_err(ServiceError::from_db_err)?;
    txn.commit().await.map_err(ServiceError::from_db_err)?;

    info!(book_id = %updated.id, "book_updated");
    Ok(BookPublic::from(updated))
}

/// Delete a book by id; `NotFound` if absent.
#[instrument(skip(db))]
pub async fn delete(db: &DatabaseConnection, book_id: Uuid) -> Result<(), ServiceError> {
    let res = book::Entity::delete_by_id(book_id)
        .exec(db)
        .await
        .map_err(ServiceError::from_db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("book"));
    }
    info!(book_id = %book_id, "book_deleted");
    Ok(())
}
