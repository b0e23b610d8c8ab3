/**
 * Router Configuration
 *
 * Combines the API routes, the static `/assets` directory and the shared
 * layers into one router.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - HTTP access log
 * 2. `CorsLayer::permissive`
 * 3. `DefaultBodyLimit` - request body cap from the config
 * 4. Security headers
 */

use axum::{extract::DefaultBodyLimit, http::StatusCode, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::error::conversion::status_response;
use crate::backend::middleware::with_security_headers;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Uploaded files are served from the upload directory at `/assets`.
/// Unknown routes return 404 with the usual JSON error body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    // Static uploads
    let router = router.nest_service("/assets", ServeDir::new(&app_state.uploads.dir));

    let router = router.fallback(|| async { status_response(StatusCode::NOT_FOUND, "Not found.") });

    let router = with_security_headers(router)
        .layer(DefaultBodyLimit::max(app_state.uploads.body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}
