//! Server Module
//!
//! - **`config`** - `ServerConfig` loaded from the environment
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Store selection and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use socialite::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::{AppState, UploadSettings};
