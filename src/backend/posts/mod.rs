//! Posts Module
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - Request types
//! └── handlers.rs     - HTTP handlers
//! ```
//!
//! # Handlers
//!
//! - **`create_post`** - POST /posts (multipart)
//! - **`get_feed_posts`** - GET /posts
//! - **`get_user_posts`** - GET /posts/{id}/posts
//! - **`like_post`** - PATCH /posts/{id}/like

pub mod handlers;
pub mod types;

pub use handlers::{create_post, get_feed_posts, get_user_posts, like_post};
pub use types::CreatePostRequest;
