/**
 * Authentication Handler Types
 *
 * Request and response bodies for registration and login. Field names are
 * camelCase on the wire.
 */

use serde::{Deserialize, Serialize};

use crate::shared::PublicUser;

/// Registration form (text fields of the multipart body)
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
    /// Client-supplied picture name, used when no file is attached
    #[serde(default)]
    pub picture_path: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
}

impl RegisterRequest {
    /// Strip surrounding whitespace from the name and email fields
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            ..self
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// `user` is the public view; the password hash is never part of it.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
    pub user: PublicUser,
}
