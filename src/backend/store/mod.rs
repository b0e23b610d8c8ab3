//! Persistence Layer
//!
//! Handlers talk to storage only through the `UserStore` and `PostStore`
//! traits. Two backends implement both:
//!
//! - **`postgres`** - `PgStore`, sqlx on PostgreSQL (used when `DATABASE_URL` is set)
//! - **`memory`** - `MemoryStore`, `RwLock`-guarded maps (fallback and tests)
//!
//! # Friend toggles
//!
//! `UserStore::toggle_friend` updates both users atomically. `PgStore` runs it in
//! one transaction with both rows locked. `MemoryStore` holds the write lock
//! for the whole update.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{FriendChange, NewPost, NewUser, Post, SharedError, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Another user already registered this email
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// The addressed record does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Record kind ("User", "Post")
        entity: &'static str,
        /// Requested id
        id: Uuid,
    },

    /// A domain rule rejected the mutation
    #[error(transparent)]
    Domain(#[from] SharedError),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Both sides of a friendship after a toggle
#[derive(Debug, Clone)]
pub struct FriendToggle {
    pub user: User,
    pub friend: User,
    pub change: FriendChange,
}

/// User persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user and return the saved record
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Exact-match lookup
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Load every user in `ids`; unknown ids are skipped, order is unspecified
    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>>;

    /// Toggle the friend edge between two users in a single atomic update
    async fn toggle_friend(&self, user_id: Uuid, friend_id: Uuid) -> StoreResult<FriendToggle>;
}

/// Post persistence
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post>;

    /// All posts, newest first
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// Posts authored by `user_id`, newest first
    async fn list_posts_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Post>>;

    /// Toggle `user_id`'s like on a post and return the updated post
    async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Post>;
}
