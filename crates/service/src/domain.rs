use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::{book, seller};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Partial seller update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Book creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: Uuid,
}

/// Partial book update; a supplied `seller_id` is re-validated by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub count_pages: Option<i32>,
    pub seller_id: Option<Uuid>,
}

/// Public seller view. The storage record's password hash has no field here,
/// so omission is structural rather than per-handler discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerPublic {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<seller::Model> for SellerPublic {
    fn from(m: seller::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email }
    }
}

/// Public book view (the full attribute set is public).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPublic {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: Uuid,
}

impl From<book::Model> for BookPublic {
    fn from(m: book::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            author: m.author,
            year: m.year,
            count_pages: m.count_pages,
            seller_id: m.seller_id,
        }
    }
}

/// Seller detail view with owned books embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerWithBooks {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<BookPublic>,
}

impl SellerWithBooks {
    pub fn from_model(m: seller::Model, books: Vec<book::Model>) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            books: books.into_iter().map(BookPublic::from).collect(),
        }
    }
}
