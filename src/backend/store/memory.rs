//! In-memory store
//!
//! Used when no `DATABASE_URL` is configured, and as the backend for tests.
//! Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{FriendToggle, PostStore, StoreError, StoreResult, UserStore};
use crate::shared::user::toggle_friendship;
use crate::shared::{NewPost, NewUser, Post, User};

/// `RwLock`-guarded users and posts
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    /// Insertion order doubles as creation order
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let user = user.into_user(Uuid::new_v4(), Utc::now());
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn toggle_friend(&self, user_id: Uuid, friend_id: Uuid) -> StoreResult<FriendToggle> {
        let mut users = self.users.write().await;

        let mut user = users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", user_id))?;
        let mut friend = users
            .get(&friend_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", friend_id))?;

        let change = toggle_friendship(&mut user, &mut friend)?;

        let now = Utc::now();
        user.updated_at = now;
        friend.updated_at = now;
        users.insert(user.id, user.clone());
        users.insert(friend.id, friend.clone());

        Ok(FriendToggle {
            user,
            friend,
            change,
        })
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let post = post.into_post(Uuid::new_v4(), Utc::now());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.read().await.iter().rev().cloned().collect())
    }

    async fn list_posts_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Post>> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| StoreError::not_found("Post", post_id))?;

        post.toggle_like(user_id);
        post.updated_at = Utc::now();
        Ok(post.clone())
    }
}
