//! Pre-signed upload issuance seam for editor image uploads.
//!
//! Validation lives here; issuing the signature is the object-storage
//! collaborator's job behind [`UploadSigner`].

use std::collections::HashSet;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ClubError;

use super::Result;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

static ALLOWED_CONTENT_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["image/jpeg", "image/png", "image/gif", "image/webp"]
        .into_iter()
        .collect()
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl UploadRequest {
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(ClubError::Validation("upload key must not be empty".into()));
        }
        if !ALLOWED_CONTENT_TYPES.contains(self.content_type.as_str()) {
            return Err(ClubError::Validation(format!(
                "content type `{}` is not allowed",
                self.content_type
            )));
        }
        if self.size_bytes > MAX_UPLOAD_BYTES {
            return Err(ClubError::Validation(format!(
                "upload of {} bytes exceeds the {} byte limit",
                self.size_bytes, MAX_UPLOAD_BYTES
            )));
        }
        Ok(())
    }
}

/// Form fields plus URL the browser posts the file to directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadTicket {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

/// Issues pre-signed upload tickets against the object store.
pub trait UploadSigner: Send + Sync {
    fn sign_upload(&self, request: &UploadRequest, ttl: Duration) -> Result<UploadTicket>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content_type: &str, size_bytes: u64) -> UploadRequest {
        UploadRequest {
            bucket: "media".into(),
            key: "posts/cover.png".into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }

    #[test]
    fn accepts_an_image_within_the_size_cap() {
        assert!(request("image/png", 1024).validate().is_ok());
    }

    #[test]
    fn rejects_disallowed_content_types_and_oversize_files() {
        assert!(request("application/zip", 1024).validate().is_err());
        assert!(request("image/png", MAX_UPLOAD_BYTES + 1).validate().is_err());
    }
}
