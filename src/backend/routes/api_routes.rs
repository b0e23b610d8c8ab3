/**
 * API Routes
 *
 * ## Public
 * - `POST /auth/register` - User registration (multipart, `picture` file)
 * - `POST /auth/login` - User login
 *
 * ## Protected (bearer token)
 * - `GET /users/{id}` - Public user view
 * - `GET /users/{id}/friends` - Friend summaries
 * - `PATCH /users/{id}/{friend_id}` - Toggle a friendship
 * - `GET /posts` - Feed, newest first
 * - `POST /posts` - Create a post (multipart, `picture` file)
 * - `GET /posts/{id}/posts` - Posts by user `id`
 * - `PATCH /posts/{id}/like` - Toggle the caller's like
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{create_post, get_feed_posts, get_user_posts, like_post};
use crate::backend::server::state::AppState;
use crate::backend::users::{add_remove_friend, get_user, get_user_friends};

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Routes that require `auth_middleware`
///
/// Path parameters in the same position share one name (`id`) because the
/// router rejects differently named parameters at a shared prefix.
pub fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/friends", get(get_user_friends))
        .route("/users/{id}/{friend_id}", patch(add_remove_friend))
        .route("/posts", get(get_feed_posts).post(create_post))
        .route("/posts/{id}/posts", get(get_user_posts))
        .route("/posts/{id}/like", patch(like_post))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router.merge(auth_routes()).merge(protected_routes(state))
}
