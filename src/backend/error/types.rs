/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned by handlers and extractors and converted to
 * HTTP responses in `conversion.rs`.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status:
 * - Unknown email or wrong password at login (400)
 * - Missing or invalid bearer token (400 `"Access denied."`)
 * - Malformed multipart body (400)
 * - Unknown user or post (404)
 *
 * ## Wrapped Errors
 *
 * Failures from the domain, the store, bcrypt, jsonwebtoken and disk IO.
 * Their status is derived from the wrapped error.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Message returned for a missing or invalid bearer token
pub const ACCESS_DENIED: &str = "Access denied.";
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use socialite::backend::error::BackendError;
///
/// let err = BackendError::bad_request("User does not exist.");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Domain rule violation
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Persistence failure
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// Filesystem failure while storing an upload
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Token gate rejection (400 `"Access denied."`)
    pub fn access_denied() -> Self {
        Self::bad_request(ACCESS_DENIED)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - `StoreError` - 404 for missing records, 409 for duplicate email, 400 for
    ///   domain violations, 500 otherwise
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(err) => match err {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::DuplicateEmail(_) => StatusCode::CONFLICT,
                StoreError::Domain(_) => StatusCode::BAD_REQUEST,
                StoreError::Database(_) | StoreError::Migration(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::TokenError(_)
            | Self::HashError(_)
            | Self::IoError(_)
            | Self::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::StoreError(err) => err.to_string(),
            Self::TokenError(err) => err.to_string(),
            Self::HashError(err) => err.to_string(),
            Self::IoError(err) => err.to_string(),
            Self::TaskError(err) => err.to_string(),
        }
    }
}
