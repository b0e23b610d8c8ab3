/**
 * Application State Management
 *
 * `AppState` is the Axum router state. It holds the two persistence traits as
 * trait objects, the token keys and the upload settings. Everything inside is
 * behind `Arc` so cloning the state per request is cheap.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets middleware extract only the token keys,
 * i.e. `State(tokens): State<Arc<TokenKeys>>` in `auth_middleware`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use socialite::backend::AppState;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let posts = state.posts.list_posts().await;
 *     // ...
 * }
 * ```
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::{MemoryStore, PostStore, UserStore};

/// Where uploads go and how large a request may be
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub body_limit: usize,
}

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// User persistence
    pub users: Arc<dyn UserStore>,

    /// Post persistence
    pub posts: Arc<dyn PostStore>,

    /// JWT signing and verification keys
    pub tokens: Arc<TokenKeys>,

    /// Upload directory and body limit
    pub uploads: UploadSettings,

    /// bcrypt work factor for new passwords
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>, config: &ServerConfig) -> Self {
        Self {
            users,
            posts,
            tokens: Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs)),
            uploads: UploadSettings {
                dir: config.upload_dir.clone(),
                body_limit: config.body_limit_bytes,
            },
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// State backed by a fresh `MemoryStore` for both users and posts
    pub fn in_memory(config: &ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, config)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("uploads", &self.uploads)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
