//! External service port traits (asset storage, contact relay).

use async_trait::async_trait;
use serde::Serialize;

use super::error::{AssetError, RelayError};

// =============================================================================
// Asset Storage
// =============================================================================

/// Raw image bytes received from a client, before they become a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Filename as sent by the client; untrusted.
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist the upload and return the stable reference stored on the record.
    async fn store(&self, upload: &ImageUpload) -> Result<String, AssetError>;
}

// =============================================================================
// Contact Relay
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// One delivery attempt. No retries.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}
