use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use service::book_service;
use service::domain::{BookPublic, BookUpdate, NewBook};

use crate::auth::ServerState;
use crate::errors::ApiError;

#[derive(Serialize)]
pub struct BooksList {
    pub books: Vec<BookPublic>,
}

#[derive(Serialize)]
pub struct DeleteOutput {
    pub deleted: Uuid,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewBook>,
) -> Result<(StatusCode, Json<BookPublic>), ApiError> {
    let created = book_service::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<BooksList>, ApiError> {
    let books = book_service::list(&state.db).await?;
    Ok(Json(BooksList { books }))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<BookPublic>, ApiError> {
    let found = book_service::get(&state.db, book_id).await?;
    Ok(Json(found))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(book_id): Path<Uuid>,
    Json(patch): Json<BookUpdate>,
) -> Result<Json<BookPublic>, ApiError> {
    let updated = book_service::update(&state.db, book_id, patch).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<DeleteOutput>, ApiError> {
    book_service::delete(&state.db, book_id).await?;
    Ok(Json(DeleteOutput { deleted: book_id }))
}
