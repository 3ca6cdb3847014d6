//! Common validation helpers for use cases.
//!
//! Every check names the field it failed on; callers stop at the first error.

use roster_domain::common::is_blank;
use roster_domain::{CharacterDraft, CharacterFields, CharacterId, TextInput};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} exceeds maximum length of {max}")]
    TooLong { field_name: &'static str, max: usize },

    #[error("{field_name} is invalid: {reason}")]
    Invalid { field_name: &'static str, reason: String },
}

impl ValidationError {
    /// The offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field_name }
            | Self::Empty { field_name }
            | Self::TooLong { field_name, .. }
            | Self::Invalid { field_name, .. } => *field_name,
        }
    }
}

/// Validate a field is present and non-empty after trimming; returns it trimmed.
pub fn require_present<'a>(
    value: Option<&'a str>,
    field_name: &'static str,
) -> Result<&'a str, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field_name })?;
    require_non_empty(value, field_name)?;
    Ok(value.trim())
}

/// Validate a submitted field arrived as a string, if it arrived at all.
pub fn require_text<'a>(
    value: Option<&'a TextInput>,
    field_name: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    let Some(input) = value else {
        return Ok(None);
    };
    input
        .as_text()
        .map(Some)
        .ok_or_else(|| ValidationError::Invalid {
            field_name,
            reason: "must be a string".to_string(),
        })
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate a string doesn't exceed max length (in characters).
pub fn require_max_length(
    value: &str,
    max: usize,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field_name, max });
    }
    Ok(())
}

/// Check the mutable fields of a write payload. Any `id` is ignored.
pub fn validate_fields(draft: &CharacterDraft) -> Result<CharacterFields, ValidationError> {
    let name = require_text(draft.name.as_ref(), "name")?;
    let name = require_present(name, "name")?;
    require_max_length(name, MAX_NAME_LEN, "name")?;

    let description = require_text(draft.description.as_ref(), "description")?;
    let description = require_present(description, "description")?;
    require_max_length(description, MAX_DESCRIPTION_LEN, "description")?;

    let image = require_text(draft.image.as_ref(), "image")?;
    let image = require_present(image, "image")?;

    Ok(CharacterFields {
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    })
}

/// Check a create payload: optional id first, then the mutable fields.
pub fn validate_new(
    draft: &CharacterDraft,
) -> Result<(Option<CharacterId>, CharacterFields), ValidationError> {
    let requested = draft.requested_id();
    let id = require_text(requested.as_ref(), "id")?
        .map(|raw| {
            CharacterId::parse(raw).map_err(|e| ValidationError::Invalid {
                field_name: "id",
                reason: e.to_string(),
            })
        })
        .transpose()?;

    Ok((id, validate_fields(draft)?))
}
