//! Shared Module
//!
//! Domain types serialized over the HTTP API and persisted by the stores.
//! Nothing in here depends on the server stack, so these types compile
//! without the `ssr` feature.

/// User records and friend-edge rules
pub mod user;

/// Post records
pub mod post;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use user::{FriendChange, FriendSummary, NewUser, PublicUser, User};
pub use post::{NewPost, Post};
pub use error::SharedError;
