//! Backend Error Module
//!
//! - **`types`** - `BackendError` and its status mapping
//! - **`conversion`** - `IntoResponse` for `BackendError`

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
