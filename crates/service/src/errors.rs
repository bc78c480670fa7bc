use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use models::errors::ModelError;

/// Business errors for seller/book workflows
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("seller not found")]
    SellerNotFound,
    #[error("invalid credentials")]
    Unauthenticated,
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("token error: {0}")]
    Token(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    /// Translate store-level constraint violations into domain kinds; raw
    /// database errors never leak past this point.
    pub fn from_db_err(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateEmail,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::SellerNotFound,
            _ => Self::Db(e.to_string()),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::DuplicateEmail => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::SellerNotFound => 1004,
            ServiceError::Unauthenticated => 1005,
            ServiceError::Hash(_) => 1101,
            ServiceError::Token(_) => 1102,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
