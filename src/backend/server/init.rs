/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Select the store: `PgStore` when `DATABASE_URL` is set (migrations run
 *    on connect), otherwise `MemoryStore`
 * 2. Create the upload directory
 * 3. Build `AppState` and the router
 *
 * A configured database that cannot be reached or migrated fails startup.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, PostStore, StoreResult, UserStore};

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing socialite backend server");

    let (users, posts) = load_store(config).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tracing::info!("Serving uploads from {}", config.upload_dir.display());

    let app_state = AppState::new(users, posts, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}

/// Pick the persistence backend for `config`
pub async fn load_store(
    config: &ServerConfig,
) -> StoreResult<(Arc<dyn UserStore>, Arc<dyn PostStore>)> {
    match &config.database_url {
        Some(url) => {
            let store = Arc::new(PgStore::connect(url).await?);
            let users: Arc<dyn UserStore> = store.clone();
            let posts: Arc<dyn PostStore> = store;
            Ok((users, posts))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
            let store = Arc::new(MemoryStore::new());
            let users: Arc<dyn UserStore> = store.clone();
            let posts: Arc<dyn PostStore> = store;
            Ok((users, posts))
        }
    }
}
