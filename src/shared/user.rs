//! User Data Structures
//!
//! The persisted user record, the views derived from it, and the friend-edge
//! rules every store applies when a friendship is toggled.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Upper bound (exclusive) of the randomly seeded profile counters
pub const COUNTER_SEED_MAX: i32 = 10_000;

/// A user as stored, including the bcrypt hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Hashed password (bcrypt)
    pub password: String,
    pub picture_path: String,
    /// Ids of befriended users, in the order they were added
    pub friends: Vec<Uuid>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub viewed_profile: i32,
    pub impressions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub picture_path: String,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub viewed_profile: i32,
    pub impressions: i32,
}

impl NewUser {
    /// Build a new user with freshly seeded profile counters
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        picture_path: String,
        location: Option<String>,
        occupation: Option<String>,
    ) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            first_name,
            last_name,
            email,
            password_hash,
            picture_path,
            location,
            occupation,
            viewed_profile: rng.gen_range(0..COUNTER_SEED_MAX),
            impressions: rng.gen_range(0..COUNTER_SEED_MAX),
        }
    }

    /// Materialize the record under the given id and timestamp
    pub fn into_user(self, id: Uuid, now: DateTime<Utc>) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password_hash,
            picture_path: self.picture_path,
            friends: Vec::new(),
            location: self.location,
            occupation: self.occupation,
            viewed_profile: self.viewed_profile,
            impressions: self.impressions,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User view safe to return to clients (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub picture_path: String,
    pub friends: Vec<Uuid>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub viewed_profile: i32,
    pub impressions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            picture_path: user.picture_path,
            friends: user.friends,
            location: user.location,
            occupation: user.occupation,
            viewed_profile: user.viewed_profile,
            impressions: user.impressions,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Condensed friend entry returned by the friend list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub picture_path: String,
}

impl From<&User> for FriendSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            occupation: user.occupation.clone(),
            location: user.location.clone(),
            picture_path: user.picture_path.clone(),
        }
    }
}

/// Resolve `order` against the loaded `friends`, keeping friend-list order.
///
/// Ids with no loaded record are skipped.
pub fn friend_summaries(order: &[Uuid], friends: &[User]) -> Vec<FriendSummary> {
    let by_id: HashMap<Uuid, &User> = friends.iter().map(|u| (u.id, u)).collect();
    order
        .iter()
        .filter_map(|id| by_id.get(id).map(|u| FriendSummary::from(*u)))
        .collect()
}

/// Outcome of a friendship toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendChange {
    Added,
    Removed,
}

/// Add or remove the edge between `user` and `friend` on both sides.
///
/// Presence is decided by `user`'s list alone. Adding never duplicates an id
/// already on `friend`'s side.
pub fn toggle_friendship(
    user: &mut User,
    friend: &mut User,
) -> Result<FriendChange, SharedError> {
    if user.id == friend.id {
        return Err(SharedError::relationship("Cannot add yourself as a friend."));
    }

    if user.friends.contains(&friend.id) {
        user.friends.retain(|id| *id != friend.id);
        friend.friends.retain(|id| *id != user.id);
        Ok(FriendChange::Removed)
    } else {
        user.friends.push(friend.id);
        if !friend.friends.contains(&user.id) {
            friend.friends.push(user.id);
        }
        Ok(FriendChange::Added)
    }
}

/// Check registration fields against the user schema rules
///
/// Lengths are measured on the values as given. Callers trim first so the
/// checked value is the stored one.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), SharedError> {
    check_length("firstName", first_name, 2, 50)?;
    check_length("lastName", last_name, 2, 50)?;
    check_length("email", email, 1, 50)?;
    if !email.contains('@') {
        return Err(SharedError::validation("email", "must be a valid email address"));
    }
    if password.chars().count() < 5 {
        return Err(SharedError::validation("password", "must be at least 5 characters"));
    }
    Ok(())
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), SharedError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(SharedError::validation(
            field,
            format!("must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}
