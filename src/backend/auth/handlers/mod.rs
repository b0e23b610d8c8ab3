//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration (multipart)
//! - **`login`** - POST /auth/login - User authentication (JSON)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
