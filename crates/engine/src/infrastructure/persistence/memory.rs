//! In-memory catalog storage, for development and tests.

use async_trait::async_trait;
use roster_domain::{Character, CharacterFields, CharacterId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// Vec-backed store. Each operation runs under a single lock acquisition,
/// so check-and-insert is atomic here too.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    records: RwLock<Vec<Character>>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }

    async fn insert(&self, character: &Character) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        if records.iter().any(|c| c.id == character.id) {
            return Err(RepoError::conflict("Character", &character.id));
        }
        records.push(character.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &CharacterId,
        fields: &CharacterFields,
    ) -> Result<Option<Character>, RepoError> {
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|c| &c.id == id).map(|c| {
            c.apply(fields.clone());
            c.clone()
        }))
    }

    async fn delete(&self, id: &CharacterId) -> Result<Option<Character>, RepoError> {
        let mut records = self.records.write().await;
        Ok(records
            .iter()
            .position(|c| &c.id == id)
            .map(|index| records.remove(index)))
    }

    async fn close(&self) {}
}
