//! API layer - HTTP entry points.

pub mod form;
pub mod http;

use std::path::Path;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::infrastructure::assets::IMAGES_URL_PREFIX;
use crate::App;

/// Upper bound on request bodies, uploads included.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Assemble the full router: API routes, static images, and middleware.
pub fn router(app: Arc<App>, assets_dir: &Path, cors: Option<CorsLayer>) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .nest_service(&format!("/{IMAGES_URL_PREFIX}"), ServeDir::new(assets_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}

/// Build a CORS layer from a list of origins (`*` allows any).
pub fn cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}
