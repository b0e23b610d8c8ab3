//! Backend Module
//!
//! This module contains all server-side code for Socialite: an Axum HTTP
//! server in front of a user/post store.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly and global middleware stack
//! - **`auth`** - Registration, login, password hashing, JWT tokens
//! - **`users`** - Profile lookup and friend list handlers
//! - **`posts`** - Post creation, feeds and likes
//! - **`middleware`** - Bearer-token gate, multipart uploads, security headers
//! - **`store`** - `UserStore` / `PostStore` traits with Postgres and in-memory backends
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state and init
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── users/          - User handlers
//! ├── posts/          - Post handlers
//! ├── middleware/     - Request middleware and extractors
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → global layers (trace, CORS, security headers, body limit)
//! → route layer (`auth_middleware`) → extractor (`UploadForm`) → handler →
//! store → JSON response.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse` and renders `{"msg": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and token management
pub mod auth;

/// User profile and friend list handlers
pub mod users;

/// Post handlers
pub mod posts;

/// Middleware for request processing
pub mod middleware;

/// Persistence layer
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::create_app;
pub use server::AppState;
pub use error::BackendError;
