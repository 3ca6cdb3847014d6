//! Roster Engine - Main entry point.

use std::sync::Arc;

use anyhow::Context;
use roster_domain::seed_profiles;
use roster_engine::api;
use roster_engine::infrastructure::{
    assets::{DiskAssetStore, InlineAssetStore},
    clock::{SystemClock, SystemRandom},
    config::{AppConfig, ImageStorage, StorageBackend},
    persistence::{InMemoryCharacterRepo, SqliteCharacterRepo},
    ports::{AssetStore, CharacterRepo, ClockPort},
    web3forms::Web3FormsRelay,
};
use roster_engine::App;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Engine");

    let config = AppConfig::from_env().context("invalid configuration")?;
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let character_repo: Arc<dyn CharacterRepo> = match config.storage_backend {
        StorageBackend::Sqlite => {
            tracing::info!(database_url = %config.database_url, "Using SQLite catalog storage");
            let repo = SqliteCharacterRepo::connect(&config.database_url, clock.clone())
                .await
                .context("failed to open the character database")?;
            Arc::new(repo)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory catalog storage; data is lost on exit");
            Arc::new(InMemoryCharacterRepo::new())
        }
    };

    let asset_store: Arc<dyn AssetStore> = match config.image_storage {
        ImageStorage::Disk => {
            tokio::fs::create_dir_all(&config.assets_dir)
                .await
                .with_context(|| {
                    format!("failed to create {}", config.assets_dir.display())
                })?;
            Arc::new(DiskAssetStore::new(config.assets_dir.clone(), clock.clone()))
        }
        ImageStorage::Inline => Arc::new(InlineAssetStore),
    };

    if config.relay_access_key.is_none() {
        tracing::warn!("RELAY_ACCESS_KEY not set; contact submissions will fail");
    }
    let relay = Arc::new(Web3FormsRelay::new(
        &config.relay_url,
        config.relay_access_key.clone(),
        config.relay_timeout,
    ));

    let app = Arc::new(App::new(
        character_repo,
        asset_store,
        relay,
        Arc::new(SystemRandom),
    ));

    if config.seed_catalog {
        let inserted = app
            .use_cases
            .management
            .character
            .seed(seed_profiles())
            .await
            .context("failed to seed the catalog")?;
        tracing::info!(inserted, "Seed profiles loaded");
    }

    let cors = api::cors_layer(&config.cors_allowed_origins);
    if cors.is_none() {
        tracing::info!("CORS disabled (no usable CORS_ALLOWED_ORIGINS)");
    }
    let router = api::router(app.clone(), &config.assets_dir, cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    app.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
