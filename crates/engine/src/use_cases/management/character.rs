//! Character catalog CRUD operations.

use std::sync::Arc;

use roster_domain::{Character, CharacterDraft, CharacterId, CharacterProfile};

use crate::infrastructure::ports::{CharacterRepo, RandomPort};
use crate::use_cases::validation::{validate_fields, validate_new};

use super::ManagementError;

const ENTITY: &str = "Character";

pub struct CharacterCrud {
    repo: Arc<dyn CharacterRepo>,
    random: Arc<dyn RandomPort>,
}

impl CharacterCrud {
    pub fn new(repo: Arc<dyn CharacterRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { repo, random }
    }

    /// Every record in insertion order. An empty catalog is an empty list.
    pub async fn list(&self) -> Result<Vec<Character>, ManagementError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: &CharacterId) -> Result<Character, ManagementError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ManagementError::not_found(ENTITY, id))
    }

    /// Validate, assign an id if none was given, and insert.
    ///
    /// The lookup here only spares the store a doomed write; the store's
    /// unique key is what actually rejects a duplicate.
    pub async fn create(&self, draft: CharacterDraft) -> Result<Character, ManagementError> {
        let (requested_id, fields) = validate_new(&draft)?;
        let id = requested_id.unwrap_or_else(|| CharacterId::from_uuid(self.random.gen_uuid()));

        if self.repo.get(&id).await?.is_some() {
            tracing::debug!(character_id = %id, "Rejected duplicate character id");
            return Err(ManagementError::Conflict {
                entity_type: ENTITY,
                id: id.to_string(),
            });
        }

        let character = Character::new(id, fields);
        self.repo.insert(&character).await?;

        tracing::info!(character_id = %character.id, name = %character.name, "Character created");
        Ok(character)
    }

    /// Replace name, description and image. The id in the payload, if any, is ignored.
    pub async fn update(
        &self,
        id: &CharacterId,
        draft: CharacterDraft,
    ) -> Result<Character, ManagementError> {
        let fields = validate_fields(&draft)?;

        let character = self
            .repo
            .update(id, &fields)
            .await?
            .ok_or_else(|| ManagementError::not_found(ENTITY, id))?;

        tracing::info!(character_id = %id, "Character updated");
        Ok(character)
    }

    /// Remove a record and hand it back.
    pub async fn delete(&self, id: &CharacterId) -> Result<Character, ManagementError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ManagementError::not_found(ENTITY, id))?;

        tracing::info!(character_id = %id, "Character deleted");
        Ok(removed)
    }

    /// The `image` of every record, in the same order as [`Self::list`].
    pub async fn list_images(&self) -> Result<Vec<String>, ManagementError> {
        Ok(self
            .repo
            .list()
            .await?
            .into_iter()
            .map(|c| c.image)
            .collect())
    }

    /// Insert the given profiles if the catalog is empty. Returns how many were added.
    pub async fn seed(&self, profiles: &[CharacterProfile]) -> Result<usize, ManagementError> {
        if !self.repo.list().await?.is_empty() {
            tracing::debug!("Catalog already populated, skipping seed");
            return Ok(0);
        }

        let mut inserted = 0;
        for profile in profiles {
            let character = match profile.to_character() {
                Ok(character) => character,
                Err(e) => {
                    tracing::warn!(profile_id = profile.id, error = %e, "Skipping invalid seed profile");
                    continue;
                }
            };

            match self.repo.insert(&character).await {
                Ok(()) => inserted += 1,
                Err(e) if e.is_conflict() => {
                    tracing::warn!(character_id = %character.id, "Seed character already present");
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(inserted, "Seeded catalog from built-in profiles");
        Ok(inserted)
    }
}
