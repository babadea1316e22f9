//! Salted password hashing (argon2, PHC string format).
//!
//! Hashing is CPU bound, so both operations run on the blocking pool.

use crate::services::AccountError;

pub async fn hash_password(password: String) -> Result<String, AccountError> {
    tokio::task::spawn_blocking(move || password_auth::generate_hash(password))
        .await
        .map_err(|e| AccountError::Hashing(e.to_string()))
}

/// Returns false for a mismatch and for a stored hash that cannot be parsed
pub async fn verify_password(password: String, hash: String) -> bool {
    tokio::task::spawn_blocking(move || password_auth::verify_password(password, &hash).is_ok())
        .await
        .unwrap_or(false)
}
