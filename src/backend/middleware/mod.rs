//! Middleware Module
//!
//! Request processing shared by several routes.
//!
//! - **`auth`** - Bearer token verification for protected routes
//! - **`extract`** - JSON body and path extractors with JSON error bodies
//! - **`upload`** - Multipart extractor that stores the `picture` file
//! - **`security`** - Security response headers
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use socialite::backend::middleware::auth_middleware;
//! use socialite::backend::AppState;
//!
//! fn protect(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/posts", get(|| async { "feed" }))
//!         .route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;
pub mod extract;
pub mod security;
pub mod upload;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
pub use extract::{JsonBody, PathParams};
pub use security::with_security_headers;
pub use upload::{StoredFile, UploadForm, PICTURE_FIELD};
