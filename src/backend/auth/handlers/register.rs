/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Store the uploaded `picture` (done by the `UploadForm` extractor)
 * 2. Trim names and email, then validate them along with the password
 * 3. Hash password using bcrypt with a fresh salt
 * 4. Insert the user with randomly seeded profile counters
 * 5. Return the saved record
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::password::hash_password;
use crate::backend::error::BackendError;
use crate::backend::middleware::upload::UploadForm;
use crate::backend::server::state::AppState;
use crate::shared::user::validate_registration;
use crate::shared::{NewUser, User};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed multipart body or a field fails validation
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing, upload or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: multipart/form-data; boundary=X
///
/// --X
/// Content-Disposition: form-data; name="firstName"
///
/// Ada
/// --X
/// Content-Disposition: form-data; name="picture"; filename="avatar.png"
/// Content-Type: image/png
///
/// <bytes>
/// --X--
/// ```
pub async fn register(
    State(state): State<AppState>,
    form: UploadForm,
) -> Result<Json<User>, BackendError> {
    let request = form.deserialize::<RegisterRequest>()?.trimmed();
    tracing::info!("Register request for email: {}", request.email);

    validate_registration(
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.password,
    )
    .inspect_err(|e| tracing::warn!("Rejected registration for {}: {}", request.email, e))?;

    let picture_path = form
        .picture_name()
        .map(str::to_owned)
        .or(request.picture_path)
        .unwrap_or_default();

    let password_hash = hash_password(request.password, state.bcrypt_cost).await?;

    let user = state
        .users
        .insert_user(NewUser::new(
            request.first_name,
            request.last_name,
            request.email,
            password_hash,
            picture_path,
            request.location,
            request.occupation,
        ))
        .await?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok(Json(user))
}
