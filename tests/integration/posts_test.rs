//! Post API tests

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use crate::common::*;

async fn create_post(app: &TestApp, user: &TestUser, description: &str) -> Value {
    let form = MultipartForm::new().add_text("description", description);
    let response = with_token(app.server.post("/posts"), &user.token)
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

fn descriptions(posts: &[Value]) -> Vec<&str> {
    posts
        .iter()
        .map(|p| p["description"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_post_copies_author() {
    let app = spawn_app();
    let saved = app
        .register(registration_form("Ada", "ada@example.com").add_part("picture", png_part("ada.png")))
        .await;
    let response = app.login("ada@example.com", TEST_PASSWORD).await;
    let token = response.json::<Value>()["token"].as_str().unwrap().to_string();

    let form = MultipartForm::new()
        .add_text("description", "First post")
        .add_part("picture", png_part("sunset.png"));
    let response = with_token(app.server.post("/posts"), &token)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let post: Value = response.json();
    assert_eq!(post["userId"], saved["_id"]);
    assert_eq!(post["firstName"], "Ada");
    assert_eq!(post["lastName"], "Tester");
    assert_eq!(post["location"], "London");
    assert_eq!(post["description"], "First post");
    assert_eq!(post["picturePath"], "sunset.png");
    assert_eq!(post["userPicturePath"], "ada.png");
    assert_eq!(post["likes"], serde_json::json!({}));
    assert_eq!(post["comments"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_post_ignores_body_user_id() {
    let app = spawn_app();
    let ada = app.create_user("Ada").await;
    let bob = app.create_user("Bob").await;

    let form = MultipartForm::new()
        .add_text("userId", bob.id.as_str())
        .add_text("description", "Who wrote this?");
    let response = with_token(app.server.post("/posts"), &ada.token)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let post: Value = response.json();
    assert_eq!(post["userId"], ada.id.as_str());
}

#[tokio::test]
async fn test_feed_is_newest_first() {
    let app = spawn_app();
    let ada = app.create_user("Ada").await;
    let bob = app.create_user("Bob").await;

    create_post(&app, &ada, "one").await;
    create_post(&app, &bob, "two").await;
    create_post(&app, &ada, "three").await;

    let response = with_token(app.server.get("/posts"), &bob.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let posts: Vec<Value> = response.json();
    assert_eq!(descriptions(&posts), vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_user_posts_filters_by_author() {
    let app = spawn_app();
    let ada = app.create_user("Ada").await;
    let bob = app.create_user("Bob").await;

    create_post(&app, &ada, "one").await;
    create_post(&app, &bob, "two").await;
    create_post(&app, &ada, "three").await;

    let response =
        with_token(app.server.get(&format!("/posts/{}/posts", ada.id)), &bob.token).await;
    let posts: Vec<Value> = response.json();
    assert_eq!(descriptions(&posts), vec!["three", "one"]);

    let response =
        with_token(app.server.get(&format!("/posts/{}/posts", Uuid::new_v4())), &bob.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_like_toggles() {
    let app = spawn_app();
    let ada = app.create_user("Ada").await;
    let bob = app.create_user("Bob").await;
    let post = create_post(&app, &ada, "like me").await;
    let path = format!("/posts/{}/like", post["_id"].as_str().unwrap());

    let response = with_token(app.server.patch(&path), &bob.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let liked: Value = response.json();
    assert_eq!(liked["likes"][bob.id.as_str()], true);

    let response = with_token(app.server.patch(&path), &bob.token).await;
    let unliked: Value = response.json();
    assert_eq!(unliked["likes"], serde_json::json!({}));
}

#[tokio::test]
async fn test_like_unknown_post() {
    let app = spawn_app();
    let ada = app.create_user("Ada").await;

    let response = with_token(
        app.server.patch(&format!("/posts/{}/like", Uuid::new_v4())),
        &ada.token,
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_posts_require_token() {
    let app = spawn_app();

    let response = app.server.get("/posts").await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Access denied.");

    let response = app
        .server
        .post("/posts")
        .multipart(MultipartForm::new().add_text("description", "anon"))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Access denied.");
}
