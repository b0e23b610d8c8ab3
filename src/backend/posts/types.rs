//! Post request types

use serde::{Deserialize, Serialize};

/// Text fields of the create-post multipart body
///
/// The author is always the token's user; a `userId` field, if sent, is
/// ignored.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub description: String,
    /// Client-supplied picture name, used when no file is attached
    #[serde(default)]
    pub picture_path: Option<String>,
}
