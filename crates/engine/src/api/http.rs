//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use roster_domain::{Character, CharacterId, CharacterProfile};
use serde::Serialize;

use crate::api::form::CharacterForm;
use crate::app::App;
use crate::use_cases::assets::IntakeError;
use crate::use_cases::contact::{ContactForm, RelayStatus};
use crate::use_cases::management::ManagementError;
use crate::use_cases::validation::ValidationError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/characters", get(list_characters).post(create_character))
        .route("/characters/images", get(list_images))
        .route(
            "/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/profiles", get(list_profiles))
        .route("/profiles/{id}", get(get_profile))
        .route("/contact", post(send_contact))
}

async fn health() -> &'static str {
    "OK"
}

/// Ids that cannot be parsed cannot exist either.
fn character_id(raw: &str) -> Result<CharacterId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound("Character not found".to_string()))
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(State(app): State<Arc<App>>) -> Result<Json<Vec<Character>>, ApiError> {
    let characters = app.use_cases.management.character.list().await?;
    Ok(Json(characters))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let id = character_id(&id)?;
    let character = app.use_cases.management.character.get(&id).await?;
    Ok(Json(character))
}

async fn create_character(
    State(app): State<Arc<App>>,
    form: CharacterForm,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let draft = app.use_cases.images.attach(form.draft, form.upload).await?;
    let character = app.use_cases.management.character.create(draft).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    form: CharacterForm,
) -> Result<Json<Character>, ApiError> {
    let id = character_id(&id)?;
    let catalog = &app.use_cases.management.character;
    if form.upload.is_some() {
        // Don't store a file for a record that isn't there.
        catalog.get(&id).await?;
    }
    let draft = app.use_cases.images.attach(form.draft, form.upload).await?;
    let character = catalog.update(&id, draft).await?;
    Ok(Json(character))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let id = character_id(&id)?;
    let removed = app.use_cases.management.character.delete(&id).await?;
    Ok(Json(removed))
}

async fn list_images(State(app): State<Arc<App>>) -> Result<Json<Vec<String>>, ApiError> {
    let images = app.use_cases.management.character.list_images().await?;
    Ok(Json(images))
}

// =============================================================================
// Profiles (read-only)
// =============================================================================

async fn list_profiles(State(app): State<Arc<App>>) -> Json<&'static [CharacterProfile]> {
    Json(app.use_cases.management.profile.list())
}

async fn get_profile(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<&'static CharacterProfile>, ApiError> {
    let profile = app.use_cases.management.profile.get(&id)?;
    Ok(Json(profile))
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Debug, Serialize)]
struct ContactResponse {
    status: &'static str,
    message: &'static str,
}

async fn send_contact(
    State(app): State<Arc<App>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(form) = payload.map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;

    let response = match app.use_cases.contact.send(form).await? {
        RelayStatus::Sent => (
            StatusCode::OK,
            Json(ContactResponse {
                status: "success",
                message: "Email sent successfully!",
            }),
        ),
        RelayStatus::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse {
                status: "error",
                message: "Email could not be sent.",
            }),
        ),
    };

    Ok(response.into_response())
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// An extractor refused the request body; keeps the extractor's status.
    Rejected { status: StatusCode, message: String },
    Validation(ValidationError),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

fn error_response(status: StatusCode, message: &str, field: Option<&'static str>) -> Response {
    (status, Json(ErrorBody { message, field })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rejected { status, message } => error_response(status, &message, None),
            ApiError::Validation(err) => {
                error_response(StatusCode::BAD_REQUEST, &err.to_string(), Some(err.field()))
            }
            ApiError::NotFound(msg) => error_response(StatusCode::NOT_FOUND, &msg, None),
            ApiError::Conflict(msg) => error_response(StatusCode::CONFLICT, &msg, None),
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        }
    }
}

impl ApiError {
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::Validation(v) => ApiError::Validation(v),
            ManagementError::NotFound { entity_type, .. } => {
                ApiError::NotFound(format!("{entity_type} not found"))
            }
            ManagementError::Conflict { entity_type, id } => {
                ApiError::Conflict(format!("{entity_type} with id '{id}' already exists"))
            }
            ManagementError::Repo(repo) => ApiError::Internal(repo.to_string()),
        }
    }
}

impl From<IntakeError> for ApiError {
    fn from(e: IntakeError) -> Self {
        match e {
            IntakeError::Validation(v) => ApiError::Validation(v),
            IntakeError::Asset(asset) => ApiError::Internal(asset.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MAX_BODY_BYTES;
    use crate::infrastructure::assets::{DiskAssetStore, InlineAssetStore};
    use crate::infrastructure::clock::{FixedClock, SystemRandom};
    use crate::infrastructure::persistence::InMemoryCharacterRepo;
    use crate::infrastructure::ports::{AssetStore, MockContactRelay, RelayError};
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "roster-test-boundary";

    fn test_router(relay: MockContactRelay, assets: &TempDir) -> Router {
        let clock = Arc::new(FixedClock(
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        ));
        router_with(relay, Arc::new(DiskAssetStore::new(assets.path(), clock)), assets)
    }

    fn router_with(
        relay: MockContactRelay,
        store: Arc<dyn AssetStore>,
        assets: &TempDir,
    ) -> Router {
        let app = Arc::new(App::new(
            Arc::new(InMemoryCharacterRepo::new()),
            store,
            Arc::new(relay),
            Arc::new(SystemRandom),
        ));
        crate::api::router(app, assets.path(), None)
    }

    /// Multipart request with text parts and an optional `image` file part.
    fn multipart(
        method: Method,
        uri: &str,
        text: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> Request<Body> {
        let mut body = Vec::new();
        for (name, value) in text {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn stored_files(assets: &TempDir) -> usize {
        std::fs::read_dir(assets.path()).unwrap().count()
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        into_parts(router.clone().oneshot(request).await.unwrap()).await
    }

    async fn into_parts(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn mario() -> Value {
        json!({
            "name": "Mario",
            "description": "A plumber who goes on adventures to rescue Princess Peach.",
            "image": "images/mario.jpg"
        })
    }

    #[tokio::test]
    async fn create_get_delete_lifecycle() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);

        let (status, created) = send(&router, Method::POST, "/characters", Some(mario())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let uri = format!("/characters/{id}");
        let (status, fetched) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, removed) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(removed, created);

        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Character not found");

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_client_id_is_conflict() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let mut payload = mario();
        payload["id"] = json!("mario");

        let (status, first) = send(&router, Method::POST, "/characters", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["id"], "mario");

        payload["name"] = json!("Wario");
        let (status, _) = send(&router, Method::POST, "/characters", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, stored) = send(&router, Method::GET, "/characters/mario", None).await;
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn update_missing_character_is_not_found() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);

        let (status, _) =
            send(&router, Method::PUT, "/characters/nonexistent", Some(mario())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, list) = send(&router, Method::GET, "/characters", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn update_replaces_mutable_fields() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let mut payload = mario();
        payload["id"] = json!("mario");
        send(&router, Method::POST, "/characters", Some(payload)).await;

        let (status, updated) = send(
            &router,
            Method::PUT,
            "/characters/mario",
            Some(json!({
                "id": "luigi",
                "name": "Mario",
                "description": "Retired plumber",
                "image": "images/mario-old.jpg"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], "mario");
        assert_eq!(updated["description"], "Retired plumber");
    }

    #[tokio::test]
    async fn empty_name_is_bad_request_naming_field() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);

        let (status, body) = send(
            &router,
            Method::POST,
            "/characters",
            Some(json!({"name": "", "description": "x", "image": "y"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "name");
        assert_eq!(body["message"], "name cannot be empty");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/characters")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = into_parts(router.oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn images_listing_follows_catalog() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        for (id, image) in [("mario", "images/mario.jpg"), ("sonic", "images/sonic.jpg")] {
            let mut payload = mario();
            payload["id"] = json!(id);
            payload["image"] = json!(image);
            send(&router, Method::POST, "/characters", Some(payload)).await;
        }

        let (status, images) = send(&router, Method::GET, "/characters/images", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(images, json!(["images/mario.jpg", "images/sonic.jpg"]));
    }

    #[tokio::test]
    async fn multipart_upload_is_stored_and_served() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"id\"\r\n\r\nluigi\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nLuigi\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\nThe taller brother\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"luigi.png\"\r\n\
             Content-Type: image/png\r\n\r\nPNGDATA\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/characters")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, created) = into_parts(router.clone().oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "luigi");
        assert_eq!(created["image"], "images/1700000000000-luigi.png");

        let request = Request::builder()
            .uri("/images/1700000000000-luigi.png")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"PNGDATA");
    }

    #[tokio::test]
    async fn multipart_without_file_uses_text_reference() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nLink\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\nHero of Hyrule\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"image\"\r\n\r\nimages/link.jpg\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/characters")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, created) = into_parts(router.oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["image"], "images/link.jpg");
    }

    #[tokio::test]
    async fn unparseable_path_id_is_not_found() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);

        let (status, _) = send(&router, Method::GET, "/characters/not%20an%20id", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profiles_are_read_only_reference_data() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);

        let (status, profiles) = send(&router, Method::GET, "/profiles", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profiles.as_array().unwrap().len(), 3);
        assert_eq!(profiles[1]["game"], "Sonic the Hedgehog");

        let (status, link) = send(&router, Method::GET, "/profiles/link", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(link["name"], "Link");

        let (status, _) = send(&router, Method::GET, "/profiles/kirby", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn contact_reports_success_and_failure() {
        let assets = TempDir::new().unwrap();
        let mut relay = MockContactRelay::new();
        relay
            .expect_submit()
            .withf(|s| s.name == "Peach")
            .returning(|_| Ok(()));
        relay
            .expect_submit()
            .withf(|s| s.name == "Bowser")
            .returning(|_| {
                Err(RelayError::Rejected {
                    status: 403,
                    body: "invalid access key".to_string(),
                })
            });
        let router = test_router(relay, &assets);

        let (status, body) = send(
            &router,
            Method::POST,
            "/contact",
            Some(json!({"name": "Peach", "email": "peach@castle.example", "message": "Hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");

        let (status, body) = send(
            &router,
            Method::POST,
            "/contact",
            Some(json!({"name": "Bowser", "email": "bowser@keep.example", "message": "Rawr"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");

        let (status, body) = send(
            &router,
            Method::POST,
            "/contact",
            Some(json!({"name": "Nobody", "message": "no email"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "email");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn mistyped_fields_are_bad_request_naming_field() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);

        let (status, body) = send(
            &router,
            Method::POST,
            "/characters",
            Some(json!({"name": 5, "description": "x", "image": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "name");
        assert_eq!(body["message"], "name is invalid: must be a string");

        let (status, body) = send(
            &router,
            Method::POST,
            "/characters",
            Some(json!({"id": true, "name": "Mario", "description": "x", "image": ["y"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "id");

        let (status, body) = send(
            &router,
            Method::POST,
            "/contact",
            Some(json!({"name": "Peach", "email": 42, "message": "Hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "email");
    }

    #[tokio::test]
    async fn oversized_upload_is_payload_too_large() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let huge = vec![0u8; MAX_BODY_BYTES + 1];
        let request = multipart(
            Method::POST,
            "/characters",
            &[("name", "Bowser"), ("description", "Big")],
            Some(("bowser.png", huge.as_slice())),
        );

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(stored_files(&assets), 0);
    }

    #[tokio::test]
    async fn multipart_update_replaces_image() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let mut payload = mario();
        payload["id"] = json!("mario");
        send(&router, Method::POST, "/characters", Some(payload)).await;

        let request = multipart(
            Method::PUT,
            "/characters/mario",
            &[("name", "Mario"), ("description", "Now with a cape")],
            Some(("cape.png", b"CAPE".as_slice())),
        );
        let (status, updated) = into_parts(router.clone().oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], "mario");
        assert_eq!(updated["description"], "Now with a cape");
        assert_eq!(updated["image"], "images/1700000000000-cape.png");

        let (_, fetched) = send(&router, Method::GET, "/characters/mario", None).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_with_upload_for_missing_character_stores_nothing() {
        let assets = TempDir::new().unwrap();
        let router = test_router(MockContactRelay::new(), &assets);
        let request = multipart(
            Method::PUT,
            "/characters/unknown",
            &[("name", "Ghost"), ("description", "Boo")],
            Some(("boo.png", b"BOO".as_slice())),
        );

        let (status, _) = into_parts(router.oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(stored_files(&assets), 0);
    }

    #[tokio::test]
    async fn inline_storage_embeds_upload_as_data_uri() {
        let assets = TempDir::new().unwrap();
        let router = router_with(MockContactRelay::new(), Arc::new(InlineAssetStore), &assets);
        let request = multipart(
            Method::POST,
            "/characters",
            &[("id", "link"), ("name", "Link"), ("description", "Hero of Hyrule")],
            Some(("link.png", b"PNG".as_slice())),
        );

        let (status, created) = into_parts(router.clone().oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["image"], "data:image/png;base64,UE5H");
        assert_eq!(stored_files(&assets), 0);

        let (_, images) = send(&router, Method::GET, "/characters/images", None).await;
        assert_eq!(images, json!(["data:image/png;base64,UE5H"]));
    }
}
