//! Shared Error Types
//!
//! This module defines the domain-level errors raised while building or
//! mutating users and posts, before anything touches the store.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a schema rule
//! - `RelationshipError` - A friend edge cannot be formed
//!
//! # Usage
//!
//! ```rust
//! use socialite::shared::error::SharedError;
//!
//! let error = SharedError::validation("firstName", "must be between 2 and 50 characters");
//! ```
use thiserror::Error;

/// Domain errors shared by the server and its store implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Friend relationship error
    #[error("{message}")]
    RelationshipError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new relationship error
    pub fn relationship(message: impl Into<String>) -> Self {
        Self::RelationshipError {
            message: message.into(),
        }
    }
}
