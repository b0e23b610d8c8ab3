//! Route Configuration Module
//!
//! - **`router`** - Main router creation, static files and layers
//! - **`api_routes`** - Auth, user and post endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use socialite::backend::routes::create_router;
//! use socialite::backend::server::{AppState, ServerConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder().jwt_secret("dev").build()?;
//! let router = create_router(AppState::in_memory(&config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
