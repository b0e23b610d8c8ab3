//! Authentication Module
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: multipart form → password hashed → user saved → record returned
//! 2. **Login**: email and password → credentials verified → JWT token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → `auth_middleware`
//!    verifies the token and attaches the user id to the request

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
pub use handlers::{login, register};
pub use sessions::{Claims, TokenKeys};
