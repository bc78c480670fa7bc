use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// Hash a plaintext credential into a salted PHC string. Two calls on the
/// same input yield different strings that both verify.
pub fn hash_password(plaintext: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| ServiceError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// True iff `plaintext` hashes to `digest`. A malformed digest is a
/// verification failure, never an error.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default().verify_password(plaintext.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let digest = hash_password("123abc123").unwrap();
        assert!(verify_password("123abc123", &digest));
        assert!(!verify_password("wrong", &digest));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("123abc123").unwrap();
        let b = hash_password("123abc123").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("123abc123", &a));
        assert!(verify_password("123abc123", &b));
    }

    #[test]
    fn malformed_digest_fails_verification() {
        assert!(!verify_password("123abc123", "not-a-phc-string"));
        assert!(!verify_password("123abc123", ""));
    }
}
