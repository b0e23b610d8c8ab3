//! Multipart upload handling
//!
//! `UploadForm` is an extractor that consumes a `multipart/form-data` body.
//! The single `picture` file field is written unchanged to the upload
//! directory under its original filename. Everything else is collected as
//! text fields for the handler to deserialize.
//!
//! Existing files with the same name are overwritten.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::extract::{FromRequest, Multipart, Request};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Name of the file field accepted by upload routes
pub const PICTURE_FIELD: &str = "picture";

/// A file written to the upload directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name relative to the upload directory (and to `/assets`)
    pub file_name: String,
    /// Full path on disk
    pub path: PathBuf,
}

/// Text fields plus the optional stored picture of a multipart request
///
/// The picture is written to disk during extraction, before the handler
/// validates the text fields or checks for a duplicate email. A rejected
/// request can therefore still leave its file behind, or overwrite an
/// existing file of the same name.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub picture: Option<StoredFile>,
}

impl UploadForm {
    /// Stored picture name, if a file was uploaded
    pub fn picture_name(&self) -> Option<&str> {
        self.picture.as_ref().map(|p| p.file_name.as_str())
    }

    /// Deserialize the text fields into `T`
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, BackendError> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();

        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| BackendError::bad_request(format!("Invalid form: {}", e)))
    }
}

impl FromRequest<AppState> for UploadForm {
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| BackendError::bad_request(e.body_text()))?;

        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| BackendError::bad_request(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(original) = field.file_name().map(str::to_owned) {
                // Browsers send an empty filename when no file was chosen.
                if original.is_empty() && name == PICTURE_FIELD {
                    continue;
                }
                if name != PICTURE_FIELD || form.picture.is_some() {
                    tracing::warn!("Unexpected file field: {}", name);
                    return Err(BackendError::bad_request(format!("Unexpected field: {}", name)));
                }

                let file_name = sanitize_file_name(&original).ok_or_else(|| {
                    BackendError::bad_request(format!("Invalid file name: {}", original))
                })?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| BackendError::bad_request(e.body_text()))?;

                let stored = store_file(&state.uploads.dir, &file_name, &data).await?;
                tracing::info!("Stored upload {} ({} bytes)", stored.file_name, data.len());
                form.picture = Some(stored);
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| BackendError::bad_request(e.body_text()))?;
            form.fields.insert(name, value);
        }

        Ok(form)
    }
}

/// Keep only the final path component of a client-supplied filename
pub fn sanitize_file_name(original: &str) -> Option<String> {
    let base = original.rsplit(|c| c == '/' || c == '\\').next()?.trim();
    match base {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

/// Write `data` to `dir/file_name`, creating `dir` if needed
pub async fn store_file(dir: &Path, file_name: &str, data: &[u8]) -> Result<StoredFile, BackendError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, data).await?;

    Ok(StoredFile {
        file_name: file_name.to_string(),
        path,
    })
}
