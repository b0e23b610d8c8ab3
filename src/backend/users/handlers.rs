/**
 * User Handlers
 *
 * Friend lists are returned as `FriendSummary` values in the order the ids
 * appear in the user's `friends` array. Ids that no longer resolve to a user
 * are skipped.
 */

use axum::{extract::State, response::Json};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::PathParams;
use crate::backend::server::state::AppState;
use crate::backend::store::{StoreError, UserStore};
use crate::shared::user::friend_summaries;
use crate::shared::{FriendChange, FriendSummary, PublicUser, User};

async fn load_user(users: &dyn UserStore, id: Uuid) -> Result<User, BackendError> {
    users.find_user_by_id(id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", id);
        BackendError::from(StoreError::not_found("User", id))
    })
}

async fn summaries_for(users: &dyn UserStore, user: &User) -> Result<Vec<FriendSummary>, BackendError> {
    let friends = users.find_users_by_ids(&user.friends).await?;
    Ok(friend_summaries(&user.friends, &friends))
}

/// GET /users/{id}
///
/// # Errors
///
/// * `404 Not Found` - No user with this id
pub async fn get_user(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<PublicUser>, BackendError> {
    let user = load_user(state.users.as_ref(), id).await?;
    Ok(Json(PublicUser::from(user)))
}

/// GET /users/{id}/friends
pub async fn get_user_friends(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<Vec<FriendSummary>>, BackendError> {
    let user = load_user(state.users.as_ref(), id).await?;
    let summaries = summaries_for(state.users.as_ref(), &user).await?;
    Ok(Json(summaries))
}

/// PATCH /users/{id}/{friend_id}
///
/// Adds the friend edge on both users when absent, removes it from both when
/// present. Returns the updated friend list of `id`.
///
/// # Errors
///
/// * `400 Bad Request` - `id` and `friend_id` are the same user
/// * `404 Not Found` - Either user does not exist
pub async fn add_remove_friend(
    State(state): State<AppState>,
    PathParams((id, friend_id)): PathParams<(Uuid, Uuid)>,
) -> Result<Json<Vec<FriendSummary>>, BackendError> {
    let toggle = state.users.toggle_friend(id, friend_id).await?;

    match toggle.change {
        FriendChange::Added => tracing::info!("{} and {} are now friends", id, friend_id),
        FriendChange::Removed => tracing::info!("{} and {} are no longer friends", id, friend_id),
    }

    let summaries = summaries_for(state.users.as_ref(), &toggle.user).await?;
    Ok(Json(summaries))
}
