//! Write-payload extractor accepting either JSON or multipart form data.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use roster_domain::CharacterDraft;

use crate::api::http::ApiError;
use crate::infrastructure::ports::ImageUpload;

/// A character write payload plus an optional uploaded image.
///
/// Multipart parts: `id`, `name`, `description`, and `image`. An `image`
/// part that carries a filename is an upload; otherwise it is read as a
/// plain reference.
#[derive(Debug, Default)]
pub struct CharacterForm {
    pub draft: CharacterDraft,
    pub upload: Option<ImageUpload>,
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

impl<S> FromRequest<S> for CharacterForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Json(draft) = Json::<CharacterDraft>::from_request(req, state)
                .await
                .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;
            return Ok(Self {
                draft,
                upload: None,
            });
        }

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;
        read_multipart(multipart).await
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<CharacterForm, ApiError> {
    let mut form = CharacterForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "image" {
            if let Some(file_name) = field.file_name().map(str::to_owned) {
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;
                form.upload = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
                continue;
            }
        }

        let text = field
            .text()
            .await
            .map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;

        match name.as_str() {
            "id" => form.draft.id = Some(text.into()),
            "name" => form.draft.name = Some(text.into()),
            "description" => form.draft.description = Some(text.into()),
            "image" => form.draft.image = Some(text.into()),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}
