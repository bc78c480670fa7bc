use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::seller;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Seller,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Seller => Entity::belongs_to(seller::Entity)
                .from(Column::SellerId)
                .to(seller::Column::Id)
                .into(),
        }
    }
}

impl Related<seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation("title required".into()));
    }
    if title.chars().count() > 50 {
        return Err(errors::ModelError::Validation("title too long (<=50)".into()));
    }
    Ok(())
}

pub fn validate_author(author: &str) -> Result<(), errors::ModelError> {
    if author.trim().is_empty() {
        return Err(errors::ModelError::Validation("author required".into()));
    }
    if author.chars().count() > 100 {
        return Err(errors::ModelError::Validation("author too long (<=100)".into()));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), errors::ModelError> {
    if year <= 0 {
        return Err(errors::ModelError::Validation("year must be positive".into()));
    }
    Ok(())
}

pub fn validate_count_pages(count_pages: i32) -> Result<(), errors::ModelError> {
    if count_pages <= 0 {
        return Err(errors::ModelError::Validation("count_pages must be positive".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    title: &str,
    author: &str,
    year: i32,
    count_pages: i32,
    seller_id: Uuid,
) -> Result<Model, DbErr> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        author: Set(author.to_string()),
        year: Set(year),
        count_pages: Set(count_pages),
        seller_id: Set(seller_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_author_bounds() {
        assert!(validate_title("").is_err());
        assert!(validate_title(&"t".repeat(51)).is_err());
        assert!(validate_title("Wrong Code").is_ok());
        assert!(validate_author(&"a".repeat(101)).is_err());
        assert!(validate_author("Robert Martin").is_ok());
    }

    #[test]
    fn numeric_fields_positive() {
        assert!(validate_year(0).is_err());
        assert!(validate_year(2007).is_ok());
        assert!(validate_count_pages(-1).is_err());
        assert!(validate_count_pages(104).is_ok());
    }
}
