use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// HTTP projection of a service error. Each kind maps to a stable status
/// code; digests and token-validation internals never reach the body.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let e = self.0;
        let status = match &e {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) | ServiceError::SellerNotFound => StatusCode::NOT_FOUND,
            ServiceError::DuplicateEmail => StatusCode::CONFLICT,
            ServiceError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ServiceError::Hash(_) | ServiceError::Token(_) | ServiceError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = if status.is_server_error() {
            error!(code = e.code(), error = %e, "internal error");
            "internal server error".to_string()
        } else {
            e.to_string()
        };
        (status, Json(serde_json::json!({"message": message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(e: ServiceError) -> StatusCode {
        ApiError(e).into_response().status()
    }

    #[test]
    fn error_kinds_map_to_stable_statuses() {
        assert_eq!(status_of(ServiceError::Validation("x".into())), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_of(ServiceError::not_found("seller")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ServiceError::SellerNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ServiceError::DuplicateEmail), StatusCode::CONFLICT);
        assert_eq!(status_of(ServiceError::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ServiceError::Db("boom".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
