use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use models::{book, seller};

use crate::auth::password;
use crate::domain::{NewSeller, SellerPublic, SellerUpdate, SellerWithBooks};
use crate::errors::ServiceError;

const MIN_PASSWORD_LEN: usize = 8;

fn validate_password(plaintext: &str) -> Result<(), ServiceError> {
    if plaintext.len() < MIN_PASSWORD_LEN {
        return Err(ServiceError::Validation(format!(
            "password too short (>={})",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Register a new seller with a hashed password.
///
/// Duplicate-email detection is the store's unique constraint, translated by
/// `ServiceError::from_db_err`; there is no pre-check to race past.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn register(
    db: &DatabaseConnection,
    input: NewSeller,
) -> Result<SellerPublic, ServiceError> {
    seller::validate_name(&input.first_name)?;
    seller::validate_name(&input.last_name)?;
    seller::validate_email(&input.email)?;
    validate_password(&input.password)?;

    let hash = password::hash_password(&input.password)?;
    let created = seller::create(db, &input.first_name, &input.last_name, &input.email, &hash)
        .await
        .map_err(ServiceError::from_db_err)?;

    info!(seller_id = %created.id, email = %created.email, "seller_registered");
    Ok(SellerPublic::from(created))
}

/// List all sellers in insertion order, projected without digests or books.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<SellerPublic>, ServiceError> {
    let sellers = seller::Entity::find()
        .order_by_asc(seller::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db_err)?;
    Ok(sellers.into_iter().map(SellerPublic::from).collect())
}

/// Get one seller with the full attribute set of every owned book.
pub async fn get_with_books(
    db: &DatabaseConnection,
    seller_id: Uuid,
) -> Result<SellerWithBooks, ServiceError> {
    let mut rows = seller::Entity::find_by_id(seller_id)
        .find_with_related(book::Entity)
        .order_by_asc(book::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db_err)?;

    match rows.pop() {
        Some((s, books)) => Ok(SellerWithBooks::from_model(s, books)),
        None => Err(ServiceError::not_found("seller")),
    }
}

/// Partial profile update; unspecified fields are left unchanged, a supplied
/// password is re-hashed.
#[instrument(skip(db, patch))]
pub async fn update(
    db: &DatabaseConnection,
    seller_id: Uuid,
    patch: SellerUpdate,
) -> Result<SellerPublic, ServiceError> {
    // Single transaction around read-modify-write; an early return drops the
    // transaction and rolls it back.
    let txn = db.begin().await.map_err(ServiceError::from_db_err)?;

    let found = seller::Entity::find_by_id(seller_id)
        .one(&txn)
        .await
        .map_err(ServiceError::from_db_err)?
        .ok_or_else(|| ServiceError::not_found("seller"))?;
    let mut am: seller::ActiveModel = found.into();

    if let Some(first_name) = patch.first_name {
        seller::validate_name(&first_name)?;
        am.first_name = Set(first_name);
    }
    if let Some(last_name) = patch.last_name {
        seller::validate_name(&last_name)?;
        am.last_name = Set(last_name);
    }
    if let Some(email) = patch.email {
        seller::validate_email(&email)?;
        am.email = Set(email);
    }
    if let Some(plaintext) = patch.password {
        validate_password(&plaintext)?;
        am.password_hash = Set(password::hash_password(&plaintext)?);
    }
    am.updated_at = Set(Utc::now().into());

    // Email collision surfaces here as a unique violation
    let updated = am.update(&txn).await.map_err(ServiceError::from_db_err)?;
    txn.commit().await.map_err(ServiceError::from_db_err)?;

    info!(seller_id = %updated.id, "seller_updated");
    Ok(SellerPublic::from(updated))
}

/// Delete a seller; owned books go with it via the store's cascade action.
/// A nonexistent id is `NotFound`.
#[instrument(skip(db))]
pub async fn delete(db: &DatabaseConnection, seller_id: Uuid) -> Result<(), ServiceError> {
    let res = seller::Entity::delete_by_id(seller_id)
        .exec(db)
        .await
        .map_err(ServiceError::from_db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("seller"));
    }
    info!(seller_id = %seller_id, "seller_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book_service;
    use crate::domain::NewBook;
    use crate::test_support::get_db;

    fn new_seller(email: &str) -> NewSeller {
        NewSeller {
            first_name: "Ivan".into(),
            last_name: "Ivanov".into(),
            email: email.into(),
            password: "123abc123".into(),
        }
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("dup_{}@example.com", Uuid::new_v4());
        let first = register(&db, new_seller(&email)).await?;

        let second = register(&db, new_seller(&email)).await;
        assert!(matches!(second, Err(ServiceError::DuplicateEmail)));

        // First registration unaffected
        let found = get_with_books(&db, first.id).await?;
        assert_eq!(found.email, email);

        delete(&db, first.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn register_validates_input() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let mut bad = new_seller("no-at-sign");
        assert!(matches!(register(&db, bad.clone()).await, Err(ServiceError::Validation(_))));

        bad = new_seller(&format!("ok_{}@example.com", Uuid::new_v4()));
        bad.password = "short".into();
        assert!(matches!(register(&db, bad).await, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("upd_{}@example.com", Uuid::new_v4());
        let created = register(&db, new_seller(&email)).await?;

        let patch = SellerUpdate { first_name: Some("Petro".into()), ..Default::default() };
        let updated = update(&db, created.id, patch).await?;
        assert_eq!(updated.first_name, "Petro");
        assert_eq!(updated.last_name, "Ivanov");
        assert_eq!(updated.email, email);

        delete(&db, created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_to_taken_email_is_duplicate() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email_a = format!("taken_{}@example.com", Uuid::new_v4());
        let email_b = format!("other_{}@example.com", Uuid::new_v4());
        let a = register(&db, new_seller(&email_a)).await?;
        let b = register(&db, new_seller(&email_b)).await?;

        let patch = SellerUpdate { email: Some(email_a.clone()), ..Default::default() };
        let res = update(&db, b.id, patch).await;
        assert!(matches!(res, Err(ServiceError::DuplicateEmail)));

        // The colliding update rolled back; both sellers keep their emails
        assert_eq!(get_with_books(&db, b.id).await?.email, email_b);
        assert_eq!(get_with_books(&db, a.id).await?.email, email_a);

        delete(&db, a.id).await?;
        delete(&db, b.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_seller_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let res = update(&db, Uuid::new_v4(), SellerUpdate::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_books() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("cascade_{}@example.com", Uuid::new_v4());
        let owner = register(&db, new_seller(&email)).await?;
        let b = book_service::create(
            &db,
            NewBook {
                title: "Wrong Code".into(),
                author: "Robert Martin".into(),
                year: 2007,
                count_pages: 104,
                seller_id: owner.id,
            },
        )
        .await?;

        let detail = get_with_books(&db, owner.id).await?;
        assert_eq!(detail.books.len(), 1);
        assert_eq!(detail.books[0].id, b.id);

        delete(&db, owner.id).await?;

        assert!(matches!(get_with_books(&db, owner.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(book_service::get(&db, b.id).await, Err(ServiceError::NotFound(_))));

        // Idempotence choice: a second delete is NotFound
        assert!(matches!(delete(&db, owner.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
