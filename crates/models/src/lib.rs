pub mod book;
pub mod db;
pub mod errors;
pub mod seller;
