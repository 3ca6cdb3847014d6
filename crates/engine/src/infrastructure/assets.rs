//! Image asset stores: files on disk, or inline `data:` URIs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use tokio::io::AsyncWriteExt;

use crate::infrastructure::ports::{AssetError, AssetStore, ClockPort, ImageUpload};

/// URL prefix (and reference prefix) under which stored images are served.
pub const IMAGES_URL_PREFIX: &str = "images";

/// Attempts at finding a free filename when uploads land in the same millisecond.
const MAX_NAME_ATTEMPTS: u32 = 16;

/// Writes uploads into a directory as `<unix-millis>-<sanitised name>`.
///
/// The returned reference is `images/<file>`, matching the static route the
/// HTTP layer mounts over the same directory.
pub struct DiskAssetStore {
    root: PathBuf,
    clock: Arc<dyn ClockPort>,
}

impl DiskAssetStore {
    pub fn new(root: impl Into<PathBuf>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            root: root.into(),
            clock,
        }
    }
}

/// Keep ASCII alphanumerics, `.`, `-` and `_`; everything else becomes `_`.
pub fn sanitize_file_name(original: &str) -> String {
    // Clients on Windows send full paths.
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

fn write_error(path: &Path, err: impl ToString) -> AssetError {
    AssetError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl AssetStore for DiskAssetStore {
    async fn store(&self, upload: &ImageUpload) -> Result<String, AssetError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| write_error(&self.root, e))?;

        let stem = format!(
            "{}-{}",
            self.clock.now().timestamp_millis(),
            sanitize_file_name(&upload.file_name)
        );

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let file_name = if attempt == 0 {
                stem.clone()
            } else {
                format!("{attempt}-{stem}")
            };
            let path = self.root.join(&file_name);

            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(write_error(&path, e)),
            };

            file.write_all(&upload.bytes)
                .await
                .map_err(|e| write_error(&path, e))?;
            file.flush().await.map_err(|e| write_error(&path, e))?;

            tracing::info!(
                file = %file_name,
                bytes = upload.bytes.len(),
                "Stored uploaded image"
            );
            return Ok(format!("{IMAGES_URL_PREFIX}/{file_name}"));
        }

        Err(write_error(
            &self.root.join(&stem),
            "no free filename available",
        ))
    }
}

/// Encodes uploads straight into the record as `data:<mime>;base64,...`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineAssetStore;

/// Declared content type, else a guess from the extension.
pub fn mime_for(upload: &ImageUpload) -> String {
    if let Some(declared) = upload
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
    {
        return declared.to_string();
    }

    let extension = Path::new(&upload.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[async_trait]
impl AssetStore for InlineAssetStore {
    async fn store(&self, upload: &ImageUpload) -> Result<String, AssetError> {
        Ok(format!(
            "data:{};base64,{}",
            mime_for(upload),
            STANDARD.encode(&upload.bytes)
        ))
    }
}
