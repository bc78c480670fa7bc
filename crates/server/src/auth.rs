use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;
use tracing::warn;
use uuid::Uuid;

use service::auth::service as auth_service;
use service::auth::token::TokenConfig;
use service::errors::ServiceError;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub tokens: TokenConfig,
}

/// Access gate for protected routes, as an extractor: requires
/// `Authorization: Bearer <token>` carrying a valid, unexpired token. Any
/// valid token passes; the gate does not compare the identity against the
/// requested resource. The specific failure kind is logged but every
/// rejection is a uniform 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedSeller(pub Uuid);

#[async_trait]
impl FromRequestParts<ServerState> for AuthenticatedSeller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();

        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let Some(header) = header else {
            warn!(path = %path, "missing Authorization header");
            return Err(ApiError(ServiceError::Unauthenticated));
        };

        let Some(bearer) = header.strip_prefix("Bearer ") else {
            warn!(path = %path, "invalid Authorization format (expect Bearer)");
            return Err(ApiError(ServiceError::Unauthenticated));
        };

        let seller_id = auth_service::resolve_identity(bearer, &state.tokens).map_err(|e| {
            warn!(path = %path, "token validation failed");
            ApiError(e)
        })?;
        Ok(AuthenticatedSeller(seller_id))
    }
}
