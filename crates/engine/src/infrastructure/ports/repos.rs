//! Repository port traits for database access.

use async_trait::async_trait;
use roster_domain::{Character, CharacterFields, CharacterId};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

/// Keyed storage for catalog records.
///
/// Each method is a single store call, so implementations give all-or-nothing
/// writes without any help from the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Character>, RepoError>;
    async fn get(&self, id: &CharacterId) -> Result<Option<Character>, RepoError>;

    /// Must fail with [`RepoError::Conflict`] when the id is already stored,
    /// even if a concurrent insert slipped past the caller's own check.
    async fn insert(&self, character: &Character) -> Result<(), RepoError>;

    /// Replace the mutable fields. `None` when no record has this id.
    async fn update(
        &self,
        id: &CharacterId,
        fields: &CharacterFields,
    ) -> Result<Option<Character>, RepoError>;

    /// Remove and return the record. `None` when no record has this id.
    async fn delete(&self, id: &CharacterId) -> Result<Option<Character>, RepoError>;

    /// Release the underlying handle. Called once on shutdown.
    async fn close(&self);
}
