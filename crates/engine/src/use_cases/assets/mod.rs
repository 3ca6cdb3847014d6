//! Image intake: turns an uploaded file into the reference stored on a record.
//!
//! Runs ahead of validation on write paths that carry a file. The catalog
//! itself only ever sees the resulting string.

use std::sync::Arc;

use roster_domain::{CharacterDraft, TextInput};

use crate::infrastructure::ports::{AssetError, AssetStore, ImageUpload};
use crate::use_cases::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Asset storage failed: {0}")]
    Asset(#[from] AssetError),
}

pub struct ImageIntake {
    store: Arc<dyn AssetStore>,
}

impl ImageIntake {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Store the upload, if any, and put its reference into the draft's `image`.
    ///
    /// Without an upload the draft passes through untouched, keeping whatever
    /// reference the caller supplied.
    pub async fn attach(
        &self,
        mut draft: CharacterDraft,
        upload: Option<ImageUpload>,
    ) -> Result<CharacterDraft, IntakeError> {
        let Some(upload) = upload else {
            return Ok(draft);
        };

        if upload.bytes.is_empty() {
            return Err(ValidationError::Invalid {
                field_name: "image",
                reason: "uploaded file is empty".to_string(),
            }
            .into());
        }

        let reference = self.store.store(&upload).await?;
        tracing::debug!(
            original = %upload.file_name,
            reference_len = reference.len(),
            "Image upload stored"
        );

        draft.image = Some(TextInput::Text(reference));
        Ok(draft)
    }
}
