//! Authentication API tests
//!
//! Registration, login and the bearer-token gate.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use axum_test::multipart::MultipartForm;
use uuid::Uuid;

use socialite::backend::auth::TokenKeys;

use crate::common::*;

#[tokio::test]
async fn test_register_returns_saved_user() {
    let app = spawn_app();

    let saved = app
        .register(registration_form("Ada", "ada@example.com"))
        .await;

    assert_eq!(saved["firstName"], "Ada");
    assert_eq!(saved["lastName"], "Tester");
    assert_eq!(saved["email"], "ada@example.com");
    assert_eq!(saved["location"], "London");
    assert_eq!(saved["occupation"], "Engineer");
    assert_eq!(saved["friends"], serde_json::json!([]));
    assert_eq!(saved["picturePath"], "");
    assert!(Uuid::parse_str(saved["_id"].as_str().unwrap()).is_ok());

    // The stored record carries the hash, never the plaintext
    let password = saved["password"].as_str().unwrap();
    assert_ne!(password, TEST_PASSWORD);
    assert!(password.starts_with("$2"));

    let viewed = saved["viewedProfile"].as_i64().unwrap();
    let impressions = saved["impressions"].as_i64().unwrap();
    assert!((0..10_000).contains(&viewed));
    assert!((0..10_000).contains(&impressions));
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let app = spawn_app();

    let response = app
        .server
        .post("/auth/register")
        .multipart(registration_form("A", "a@example.com"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_contains!(body["msg"].as_str().unwrap(), "firstName");

    let response = app
        .server
        .post("/auth/register")
        .multipart(registration_form("Grace", "not-an-email"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_stores_trimmed_fields() {
    let app = spawn_app();

    let form = MultipartForm::new()
        .add_text("firstName", "  Ada ")
        .add_text("lastName", " Lovelace\t")
        .add_text("email", " ada@example.com  ")
        .add_text("password", TEST_PASSWORD);
    let saved = app.register(form).await;

    assert_eq!(saved["firstName"], "Ada");
    assert_eq!(saved["lastName"], "Lovelace");
    assert_eq!(saved["email"], "ada@example.com");

    let response = app.login("ada@example.com", TEST_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_rejects_name_padded_past_limit() {
    let app = spawn_app();
    let long_name = format!("Ab{}", "c".repeat(49));

    let response = app
        .server
        .post("/auth/register")
        .multipart(registration_form(&long_name, "ab@example.com"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_contains!(body["msg"].as_str().unwrap(), "firstName");

    let padded = format!("  {}  ", "a".repeat(50));
    let response = app
        .server
        .post("/auth/register")
        .multipart(registration_form(&padded, "pad@example.com"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["firstName"].as_str().unwrap().len(), 50);
}

#[tokio::test]
async fn test_register_requires_password() {
    let app = spawn_app();

    let form = MultipartForm::new()
        .add_text("firstName", "Grace")
        .add_text("lastName", "Hopper")
        .add_text("email", "grace@example.com");

    let response = app.server.post("/auth/register").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_contains!(body["msg"].as_str().unwrap(), "password");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = spawn_app();
    app.register(registration_form("Ada", "ada@example.com")).await;

    let response = app
        .server
        .post("/auth/register")
        .multipart(registration_form("Adele", "ada@example.com"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_success() {
    let app = spawn_app();
    let saved = app
        .register(registration_form("Ada", "ada@example.com"))
        .await;

    let response = app.login("ada@example.com", TEST_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["_id"], saved["_id"]);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = spawn_app();
    app.register(registration_form("Ada", "ada@example.com")).await;

    let response = app.login("ada@example.com", "wrong-password").await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid credentials.");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = spawn_app();

    let response = app.login("nobody@example.com", TEST_PASSWORD).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "User does not exist.");
}

#[tokio::test]
async fn test_login_email_is_exact_match() {
    let app = spawn_app();
    app.register(registration_form("Ada", "ada@example.com")).await;

    let response = app.login("ADA@example.com", TEST_PASSWORD).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "User does not exist.");
}

#[tokio::test]
async fn test_login_missing_password_is_json_error() {
    let app = spawn_app();

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": "ada@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_contains!(body["msg"].as_str().unwrap(), "password");
}

#[tokio::test]
async fn test_login_non_json_body_is_json_error() {
    let app = spawn_app();

    let response = app.server.post("/auth/login").text("email=ada").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["msg"].is_string());
}

#[tokio::test]
async fn test_login_token_passes_middleware() {
    let app = spawn_app();
    let user = app.create_user("Ada").await;

    let response = with_token(app.server.get(&format!("/users/{}", user.id)), &user.token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], user.email);
}

#[tokio::test]
async fn test_missing_token_is_denied() {
    let app = spawn_app();
    let user = app.create_user("Ada").await;

    let response = app.server.get(&format!("/users/{}", user.id)).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Access denied.");
}

#[tokio::test]
async fn test_token_from_other_secret_is_denied() {
    let app = spawn_app();
    let user = app.create_user("Ada").await;

    let forged = TokenKeys::new("some-other-secret", 600)
        .create_token(Uuid::parse_str(&user.id).unwrap())
        .unwrap();
    let response = with_token(app.server.get(&format!("/users/{}", user.id)), &forged).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Access denied.");
}

#[tokio::test]
async fn test_tampered_payload_is_denied() {
    let app = spawn_app();
    let ada = app.create_user("Ada").await;
    let bob = app.create_user("Bob").await;

    // Ada's header and signature around Bob's claims
    let ada_parts: Vec<&str> = ada.token.split('.').collect();
    let bob_parts: Vec<&str> = bob.token.split('.').collect();
    let tampered = format!("{}.{}.{}", ada_parts[0], bob_parts[1], ada_parts[2]);

    let response = with_token(app.server.get(&format!("/users/{}", bob.id)), &tampered).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Access denied.");
}
