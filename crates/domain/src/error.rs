//! Domain error type.

use thiserror::Error;

/// Errors raised while constructing domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A character id that is empty, too long, or uses disallowed characters.
    #[error("Invalid character id: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(reason: impl Into<String>) -> Self {
        Self::InvalidId(reason.into())
    }
}
