//! Password hashing
//!
//! bcrypt is CPU-bound, so both operations run on tokio's blocking pool. The
//! salt is generated by `bcrypt::hash` for every call.

use crate::backend::error::BackendError;

/// Hash `password` with a fresh random salt at the given cost
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Check `password` against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}
