/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by exact email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and the public user view
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::PublicUser;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - `"User does not exist."`, `"Invalid credentials."` or a malformed body
/// * `500 Internal Server Error` - Store, bcrypt or token failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "analytical"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "_id": "123e4567-e89b-12d3-a456-426614174000", "firstName": "Ada", ... }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .users
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::bad_request("User does not exist.")
        })?;

    let valid = verify_password(request.password, user.password.clone()).await?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::bad_request("Invalid credentials."));
    }

    let token = state.tokens.create_token(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(user),
    }))
}
