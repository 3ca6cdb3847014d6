//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating validation and
//! the storage port.

mod character;
mod profile;

pub use character::CharacterCrud;
pub use profile::ProfileQueries;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    Conflict {
        entity_type: &'static str,
        id: String,
    },
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl ManagementError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

impl From<RepoError> for ManagementError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict { entity_type, id } => Self::Conflict { entity_type, id },
            other => Self::Repo(other),
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub character: CharacterCrud,
    pub profile: ProfileQueries,
}

impl ManagementUseCases {
    pub fn new(character: CharacterCrud, profile: ProfileQueries) -> Self {
        Self { character, profile }
    }
}
