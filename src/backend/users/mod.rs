//! User Profile Module
//!
//! Profile reads and the friend toggle. All routes here sit behind
//! `auth_middleware`.
//!
//! - **`get_user`** - GET /users/{id}
//! - **`get_user_friends`** - GET /users/{id}/friends
//! - **`add_remove_friend`** - PATCH /users/{id}/{friend_id}

pub mod handlers;

pub use handlers::{add_remove_friend, get_user, get_user_friends};
