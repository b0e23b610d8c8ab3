/**
 * Post Handlers
 *
 * Posts are written by the authenticated user and denormalize the author's
 * name, location and picture at creation time.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, PathParams, UploadForm};
use crate::backend::posts::types::CreatePostRequest;
use crate::backend::server::state::AppState;
use crate::shared::{NewPost, Post};

/// POST /posts
///
/// # Errors
///
/// * `400 Bad Request` - Malformed multipart body
/// * `404 Not Found` - The token's user no longer exists
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    form: UploadForm,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let request: CreatePostRequest = form.deserialize()?;

    let author = state
        .users
        .find_user_by_id(caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Post author not found: {}", caller.user_id);
            BackendError::not_found("User not found.")
        })?;

    let picture_path = form
        .picture_name()
        .map(str::to_owned)
        .or(request.picture_path)
        .unwrap_or_default();

    let post = state
        .posts
        .insert_post(NewPost::by(&author, request.description, picture_path))
        .await?;

    tracing::info!("Post {} created by {}", post.id, author.id);
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
pub async fn get_feed_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = state.posts.list_posts().await?;
    Ok(Json(posts))
}

/// GET /posts/{id}/posts
///
/// An unknown user simply has no posts.
pub async fn get_user_posts(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = state.posts.list_posts_by_user(user_id).await?;
    Ok(Json(posts))
}

/// PATCH /posts/{id}/like
///
/// Toggles the caller's like and returns the updated post.
///
/// # Errors
///
/// * `404 Not Found` - No post with this id
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    PathParams(post_id): PathParams<Uuid>,
) -> Result<Json<Post>, BackendError> {
    let post = state.posts.toggle_like(post_id, caller.user_id).await?;
    tracing::debug!("Like on {} toggled by {}", post_id, caller.user_id);
    Ok(Json(post))
}
