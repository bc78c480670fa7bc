use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Signing parameters for issued tokens.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Verification failures, distinguishable for logging only. Callers present
/// all three to the outside world as a single unauthenticated signal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("bad signature")]
    BadSignature,
    #[error("malformed token")]
    Malformed,
}

/// Issue a signed token embedding the seller id, expiring a fixed window
/// from now.
pub fn issue(seller_id: Uuid, cfg: &TokenConfig) -> Result<String, ServiceError> {
    let now = Utc::now();
    let claims = Claims {
        sub: seller_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(cfg.ttl_minutes)).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(cfg.secret.as_bytes()))
        .map_err(|e| ServiceError::Token(e.to_string()))
}

/// Check signature and expiry; return the embedded seller id if both hold.
pub fn verify(token: &str, cfg: &TokenConfig) -> Result<Uuid, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        _ => TokenError::Malformed,
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(secret: &str) -> TokenConfig {
        TokenConfig { secret: secret.into(), ttl_minutes: 30 }
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let cfg = cfg("test-secret");
        let sid = Uuid::new_v4();
        let token = issue(sid, &cfg).unwrap();
        assert_eq!(verify(&token, &cfg), Ok(sid));
    }

    #[test]
    fn expired_token_rejected() {
        // Well past the default decoding leeway
        let cfg = TokenConfig { secret: "test-secret".into(), ttl_minutes: -10 };
        let token = issue(Uuid::new_v4(), &cfg).unwrap();
        assert_eq!(verify(&token, &cfg), Err(TokenError::Expired));
    }

    #[test]
    fn wrong_secret_is_bad_signature() {
        let token = issue(Uuid::new_v4(), &cfg("secret-a")).unwrap();
        assert_eq!(verify(&token, &cfg("secret-b")), Err(TokenError::BadSignature));
    }

    #[test]
    fn tampered_token_rejected() {
        let cfg = cfg("test-secret");
        let mut token = issue(Uuid::new_v4(), &cfg).unwrap();
        // Flip a character in the signature segment
        let flipped = if token.ends_with('a') { 'b' } else { 'a' };
        token.pop();
        token.push(flipped);
        assert!(verify(&token, &cfg).is_err());
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(verify("not.a.jwt", &cfg("test-secret")), Err(TokenError::Malformed));
        assert_eq!(verify("", &cfg("test-secret")), Err(TokenError::Malformed));
    }
}
