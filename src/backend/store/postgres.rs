/**
 * PostgreSQL Store
 *
 * sqlx-backed implementation of `UserStore` and `PostStore`.
 *
 * # Schema
 *
 * See `migrations/`. Friend lists are a `UUID[]` column on `users`. Likes are
 * a JSONB object on `posts`, so both round-trip in the same shape the API
 * serves.
 */

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{FriendToggle, PostStore, StoreError, StoreResult, UserStore};
use crate::shared::user::toggle_friendship;
use crate::shared::{NewPost, NewUser, Post, SharedError, User};

const USER_COLUMNS: &str = "id, first_name, last_name, email, password_hash, picture_path, friends, \
     location, occupation, viewed_profile, impressions, created_at, updated_at";

const POST_COLUMNS: &str = "id, user_id, first_name, last_name, location, description, picture_path, \
     user_picture_path, likes, comments, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    picture_path: String,
    friends: Vec<Uuid>,
    location: Option<String>,
    occupation: Option<String>,
    viewed_profile: i32,
    impressions: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password: row.password_hash,
            picture_path: row.picture_path,
            friends: row.friends,
            location: row.location,
            occupation: row.occupation,
            viewed_profile: row.viewed_profile,
            impressions: row.impressions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    first_name: String,
    last_name: String,
    location: Option<String>,
    description: String,
    picture_path: String,
    user_picture_path: String,
    likes: Json<BTreeMap<Uuid, bool>>,
    comments: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            user_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            location: row.location,
            description: row.description,
            picture_path: row.picture_path,
            user_picture_path: row.user_picture_path,
            likes: row.likes.0,
            comments: row.comments,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run pending migrations
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let email = user.email.clone();

        let result = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash, picture_path, friends,
                               location, occupation, viewed_profile, impressions, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, '{{}}', $7, $8, $9, $10, $11, $11)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.picture_path)
        .bind(&user.location)
        .bind(&user.occupation)
        .bind(user.viewed_profile)
        .bind(user.impressions)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateEmail(email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)"
        ))
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn toggle_friend(&self, user_id: Uuid, friend_id: Uuid) -> StoreResult<FriendToggle> {
        if user_id == friend_id {
            return Err(SharedError::relationship("Cannot add yourself as a friend.").into());
        }

        let mut tx = self.pool.begin().await?;

        // Rows are locked in id order so concurrent toggles cannot deadlock.
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1) ORDER BY id FOR UPDATE"
        ))
        .bind(vec![user_id, friend_id])
        .fetch_all(&mut *tx)
        .await?;

        let mut user: Option<User> = None;
        let mut friend: Option<User> = None;
        for row in rows {
            if row.id == user_id {
                user = Some(row.into());
            } else if row.id == friend_id {
                friend = Some(row.into());
            }
        }
        let mut user = user.ok_or_else(|| StoreError::not_found("User", user_id))?;
        let mut friend = friend.ok_or_else(|| StoreError::not_found("User", friend_id))?;

        let change = toggle_friendship(&mut user, &mut friend)?;

        let now = Utc::now();
        for side in [&mut user, &mut friend] {
            side.updated_at = now;
            sqlx::query("UPDATE users SET friends = $1, updated_at = $2 WHERE id = $3")
                .bind(&side.friends)
                .bind(now)
                .bind(side.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(FriendToggle {
            user,
            friend,
            change,
        })
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (id, user_id, first_name, last_name, location, description, picture_path,
                               user_picture_path, likes, comments, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, '{{}}'::jsonb, '{{}}', $9, $9)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(post.user_id)
        .bind(&post.first_name)
        .bind(&post.last_name)
        .bind(&post.location)
        .bind(&post.description)
        .bind(&post.picture_path)
        .bind(&post.user_picture_path)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_posts_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn toggle_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Post> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1 FOR UPDATE"
        ))
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::not_found("Post", post_id))?;

        let mut post = Post::from(row);
        post.toggle_like(user_id);
        post.updated_at = Utc::now();

        sqlx::query("UPDATE posts SET likes = $1, updated_at = $2 WHERE id = $3")
            .bind(Json(&post.likes))
            .bind(post.updated_at)
            .bind(post.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(post)
    }
}
