use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use service::domain::{NewSeller, SellerPublic, SellerUpdate, SellerWithBooks};
use service::seller_service;

use crate::auth::{AuthenticatedSeller, ServerState};
use crate::errors::ApiError;

#[derive(Serialize)]
pub struct SellersList {
    pub sellers: Vec<SellerPublic>,
}

#[derive(Serialize)]
pub struct DeleteOutput {
    pub deleted: Uuid,
}

pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<NewSeller>,
) -> Result<(StatusCode, Json<SellerPublic>), ApiError> {
    let created = seller_service::register(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<SellersList>, ApiError> {
    let sellers = seller_service::list(&state.db).await?;
    Ok(Json(SellersList { sellers }))
}

/// Protected by the access gate; any valid token identity may read any
/// seller (minimal-authz policy).
pub async fn get_one(
    State(state): State<ServerState>,
    identity: AuthenticatedSeller,
    Path(seller_id): Path<Uuid>,
) -> Result<Json<SellerWithBooks>, ApiError> {
    info!(requester = %identity.0, seller_id = %seller_id, "seller_detail_request");
    let detail = seller_service::get_with_books(&state.db, seller_id).await?;
    Ok(Json(detail))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(seller_id): Path<Uuid>,
    Json(patch): Json<SellerUpdate>,
) -> Result<Json<SellerPublic>, ApiError> {
    let updated = seller_service::update(&state.db, seller_id, patch).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(seller_id): Path<Uuid>,
) -> Result<Json<DeleteOutput>, ApiError> {
    seller_service::delete(&state.db, seller_id).await?;
    Ok(Json(DeleteOutput { deleted: seller_id }))
}
