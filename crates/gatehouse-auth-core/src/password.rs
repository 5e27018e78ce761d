//! Password hashing and verification (Argon2id)
//!
//! The salt is embedded in the PHC output string, so no separate salt
//! storage is needed, and the primitive itself provides the timing
//! guarantees for verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::AuthError;

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored hash.
///
/// A mismatch is `Ok(false)`, never an error; errors are reserved for a
/// malformed stored hash or a broken primitive.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Hashing(format!("invalid stored hash format: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(format!(
            "password verification failed: {e}"
        ))),
    }
}
