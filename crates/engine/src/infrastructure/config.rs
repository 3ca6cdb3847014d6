//! Application configuration

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::infrastructure::web3forms::DEFAULT_RELAY_URL;

/// Where catalog records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!("unknown storage backend {other:?} (expected sqlite or memory)")),
        }
    }
}

/// How uploaded images become references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStorage {
    Disk,
    Inline,
}

impl FromStr for ImageStorage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disk" => Ok(Self::Disk),
            "inline" => Ok(Self::Inline),
            other => Err(anyhow!("unknown image storage {other:?} (expected disk or inline)")),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host
    pub server_host: String,
    /// Bind port
    pub server_port: u16,

    /// Catalog storage backend
    pub storage_backend: StorageBackend,
    /// SQLite connection string (sqlite backend only)
    pub database_url: String,

    /// Directory holding uploaded and static character images
    pub assets_dir: PathBuf,
    /// Disk files or inline data URIs for uploads
    pub image_storage: ImageStorage,

    /// Contact relay endpoint
    pub relay_url: String,
    /// Contact relay credential; relay reports failure when unset
    pub relay_access_key: Option<String>,
    /// Contact relay request timeout
    pub relay_timeout: Duration,

    /// Insert the seed profiles into an empty catalog at startup
    pub seed_catalog: bool,

    /// CORS allowed origins (comma-separated, or "*" for any)
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_host: var("SERVER_HOST", "0.0.0.0"),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            storage_backend: var("STORAGE_BACKEND", "sqlite")
                .parse()
                .context("STORAGE_BACKEND is invalid")?,
            database_url: var("DATABASE_URL", "sqlite:characters.db?mode=rwc"),

            assets_dir: PathBuf::from(var("ASSETS_DIR", "public/images")),
            image_storage: var("IMAGE_STORAGE", "disk")
                .parse()
                .context("IMAGE_STORAGE is invalid")?,

            relay_url: var("RELAY_URL", DEFAULT_RELAY_URL),
            relay_access_key: lookup("RELAY_ACCESS_KEY")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            relay_timeout: Duration::from_secs(
                var("RELAY_TIMEOUT_SECS", "10")
                    .parse()
                    .context("RELAY_TIMEOUT_SECS must be a whole number of seconds")?,
            ),

            seed_catalog: matches!(
                var("SEED_CATALOG", "false").trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ),

            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS", "*")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
