//! Endpoint families. Each module adds methods to [`ApiClient`].
//!
//! [`ApiClient`]: crate::ApiClient

mod admin;
mod auth;
mod events;
mod forums;
mod messages;
mod posts;
mod products;
mod reviews;
mod theme;
mod users;

pub use forums::Vote;

use reqwest::multipart::Part;

use studenthub_core::{ApiError, ApiResult};

/// File attached to a multipart upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub(crate) fn into_part(self) -> ApiResult<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| ApiError::InvalidInput(format!("invalid mime type: {}", e)))
    }
}
