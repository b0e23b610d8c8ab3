//! Socialite - Main Library
//!
//! Socialite is a small social-network backend: registration and login with
//! bcrypt-hashed passwords and signed bearer tokens, user profiles with a
//! symmetric friend list, posts with likes, and picture uploads served back as
//! static assets.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types (users, posts, friend edges) and their errors
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, middleware and routes
//!   - Authentication (bcrypt + JWT)
//!   - Persistence behind `UserStore` / `PostStore` (Postgres or in-memory)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use socialite::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
