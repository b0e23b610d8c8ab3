/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers can
 * return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "msg": "Invalid credentials.",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("{} {}", status.as_u16(), self);
        }

        let body = serde_json::json!({
            "msg": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

// Framework rejections are client errors with the usual body, whatever
// status axum would have picked (415, 422, ...).
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected JSON body: {}", rejection.body_text());
        BackendError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path parameters: {}", rejection.body_text());
        BackendError::bad_request(rejection.body_text())
    }
}

/// Convert a bare status into a JSON error body
pub fn status_response(status: StatusCode, message: &str) -> Response {
    BackendError::handler(status, message).into_response()
}
