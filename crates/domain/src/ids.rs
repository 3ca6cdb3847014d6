use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Longest identifier the catalog accepts.
pub const MAX_CHARACTER_ID_LEN: usize = 64;

/// Lookup key of a catalog record.
///
/// Ids are either supplied by the client (`"mario"`) or generated. Either way
/// they travel as a URL path segment, so only ASCII letters, digits, `-` and
/// `_` are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterId(String);

impl CharacterId {
    /// Id in UUID simple (32 lowercase hex) form.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.simple().to_string())
    }

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("id cannot be empty"));
        }
        if value.len() > MAX_CHARACTER_ID_LEN {
            return Err(DomainError::invalid_id(format!(
                "id exceeds maximum length of {MAX_CHARACTER_ID_LEN}"
            )));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::invalid_id(format!(
                "id contains unsupported character {c:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CharacterId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CharacterId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CharacterId> for String {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}
