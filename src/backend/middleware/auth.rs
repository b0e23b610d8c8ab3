/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It extracts and
 * verifies the JWT token from the Authorization header and exposes the user ID
 * to handlers through request extensions.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the Authorization header (a leading `Bearer ` is optional)
/// 2. Verifies the token signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
///
/// Returns 400 `"Access denied."` if the token is missing or invalid.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::access_denied()
        })?;

    let user = authenticate(&tokens, auth_header)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Verify an Authorization header value
pub fn authenticate(tokens: &TokenKeys, header_value: &str) -> Result<AuthenticatedUser, BackendError> {
    let token = header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim();

    if token.is_empty() {
        tracing::warn!("Empty bearer token");
        return Err(BackendError::access_denied());
    }

    let claims = tokens.verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::access_denied()
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::access_denied()
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Axum extractor for authenticated user
///
/// Only valid on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::access_denied()
            })?;

        Ok(AuthUser(user))
    }
}
