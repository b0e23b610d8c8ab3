//! Post Data Structures

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::User;

/// A post with its author snapshot and engagement fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub description: String,
    pub picture_path: String,
    pub user_picture_path: String,
    /// Users who liked the post; values are always `true`
    pub likes: BTreeMap<Uuid, bool>,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Like the post for `user_id`, or remove an existing like.
    ///
    /// Returns whether the post is liked by `user_id` afterwards.
    pub fn toggle_like(&mut self, user_id: Uuid) -> bool {
        if self.likes.remove(&user_id).is_some() {
            false
        } else {
            self.likes.insert(user_id, true);
            true
        }
    }
}

/// Fields needed to insert a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub description: String,
    pub picture_path: String,
    pub user_picture_path: String,
}

impl NewPost {
    /// Build a post authored by `author`, copying its name, location and picture
    pub fn by(author: &User, description: String, picture_path: String) -> Self {
        Self {
            user_id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            location: author.location.clone(),
            description,
            picture_path,
            user_picture_path: author.picture_path.clone(),
        }
    }

    pub fn into_post(self, id: Uuid, now: DateTime<Utc>) -> Post {
        Post {
            id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            location: self.location,
            description: self.description,
            picture_path: self.picture_path,
            user_picture_path: self.user_picture_path,
            likes: BTreeMap::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
