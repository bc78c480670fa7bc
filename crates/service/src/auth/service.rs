use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::seller;

use super::{password, token, token::TokenConfig};
use crate::domain::SellerPublic;
use crate::errors::ServiceError;

/// Result of a successful credential check.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub seller: SellerPublic,
    pub token: String,
}

/// Check a seller's credentials and issue a signed session token.
///
/// Unknown email and wrong password both collapse into `Unauthenticated`;
/// the caller cannot tell which check failed.
#[instrument(skip(db, plaintext, cfg), fields(email = %email))]
pub async fn issue_session(
    db: &DatabaseConnection,
    email: &str,
    plaintext: &str,
    cfg: &TokenConfig,
) -> Result<AuthSession, ServiceError> {
    let Some(found) = seller::find_by_email(db, email).await? else {
        debug!("login rejected: unknown email");
        return Err(ServiceError::Unauthenticated);
    };

    if !password::verify_password(plaintext, &found.password_hash) {
        debug!(seller_id = %found.id, "login rejected: password mismatch");
        return Err(ServiceError::Unauthenticated);
    }

    let token = token::issue(found.id, cfg)?;
    info!(seller_id = %found.id, "session_issued");
    Ok(AuthSession { seller: SellerPublic::from(found), token })
}

/// Resolve a bearer token to a seller identity. The specific failure kind is
/// logged but flattened to `Unauthenticated` for the caller.
pub fn resolve_identity(bearer: &str, cfg: &TokenConfig) -> Result<Uuid, ServiceError> {
    token::verify(bearer, cfg).map_err(|e| {
        debug!(kind = ?e, "token rejected");
        ServiceError::Unauthenticated
    })
}
