//! Password hashing with Argon2id.
//!
//! Hashes are stored in PHC string format, which carries the per-record salt
//! and parameters alongside the digest.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed")]
    Hash,
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::Hash)?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
///
/// A mismatch is a normal outcome, not an error; a stored hash that fails to
/// parse can never match.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("123456789").unwrap();
        assert!(verify_password("123456789", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn salts_are_per_record() {
        let h1 = hash_password("123456789").unwrap();
        let h2 = hash_password("123456789").unwrap();
        assert_ne!(h1, h2);
        assert!(verify_password("123456789", &h1));
        assert!(verify_password("123456789", &h2));
    }

    #[test]
    fn malformed_stored_hash_never_matches() {
        assert!(!verify_password("123456789", "not-a-phc-string"));
    }
}
