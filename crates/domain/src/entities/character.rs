//! Character entity - the single record type held by the catalog.

use serde::{Deserialize, Serialize};

use crate::common::{blank_to_none, TextInput};
use crate::CharacterId;

/// A catalog record. Always fully populated once it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    /// Relative asset path (`images/mario.jpg`) or a `data:` URI.
    pub image: String,
}

impl Character {
    pub fn new(id: CharacterId, fields: CharacterFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            image: fields.image,
        }
    }

    /// Replace every mutable field at once. The id is never touched.
    pub fn apply(&mut self, fields: CharacterFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.image = fields.image;
    }

    pub fn fields(&self) -> CharacterFields {
        CharacterFields {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

/// The mutable part of a character, already checked for shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFields {
    pub name: String,
    pub description: String,
    pub image: String,
}

/// Unvalidated write payload as it arrives from a client.
///
/// Every field is optional and type-lenient here so that a missing or
/// mistyped field can be reported by name instead of failing
/// deserialization wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CharacterDraft {
    pub id: Option<TextInput>,
    pub name: Option<TextInput>,
    pub description: Option<TextInput>,
    pub image: Option<TextInput>,
}

impl CharacterDraft {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(TextInput::Text(id.into()));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(TextInput::Text(name.into()));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(TextInput::Text(description.into()));
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(TextInput::Text(image.into()));
        self
    }

    /// Supplied id, with a blank string treated as "not supplied".
    pub fn requested_id(&self) -> Option<TextInput> {
        match &self.id {
            Some(TextInput::Text(raw)) => blank_to_none(Some(raw.clone())).map(TextInput::Text),
            other => other.clone(),
        }
    }
}
