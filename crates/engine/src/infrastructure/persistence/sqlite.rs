//! SQLite-backed catalog storage.

use std::sync::Arc;

use async_trait::async_trait;
use roster_domain::{Character, CharacterFields, CharacterId};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::infrastructure::ports::{CharacterRepo, ClockPort, RepoError};

const ENTITY: &str = "Character";

/// SQLite implementation of the catalog store.
///
/// `id` is the table's primary key, so uniqueness holds even when two
/// creates race past the catalog's own duplicate check.
pub struct SqliteCharacterRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteCharacterRepo {
    /// Connect and make sure the schema exists.
    ///
    /// `database_url` is a sqlx SQLite URL, e.g. `sqlite:characters.db?mode=rwc`.
    pub async fn connect(database_url: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_schema", e))?;

        tracing::debug!(database_url, "Character table ready");

        Ok(Self { pool, clock })
    }
}

fn row_to_character(row: &SqliteRow) -> Result<Character, RepoError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepoError::serialization(e.to_string()))?;
    let id = CharacterId::parse(id).map_err(RepoError::serialization)?;
    let get = |column: &str| -> Result<String, RepoError> {
        row.try_get(column)
            .map_err(|e| RepoError::serialization(e.to_string()))
    };

    Ok(Character {
        id,
        name: get("name")?,
        description: get("description")?,
        image: get("image")?,
    })
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let rows = sqlx::query("SELECT id, name, description, image FROM characters ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_characters", e))?;

        rows.iter().map(row_to_character).collect()
    }

    async fn get(&self, id: &CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query("SELECT id, name, description, image FROM characters WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_character", e))?;

        row.as_ref().map(row_to_character).transpose()
    }

    async fn insert(&self, character: &Character) -> Result<(), RepoError> {
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO characters (id, name, description, image, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(character.id.as_str())
        .bind(&character.name)
        .bind(&character.description)
        .bind(&character.image)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                RepoError::conflict(ENTITY, &character.id)
            } else {
                RepoError::database("insert_character", e)
            }
        })?;

        Ok(())
    }

    async fn update(
        &self,
        id: &CharacterId,
        fields: &CharacterFields,
    ) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query(
            r#"
            UPDATE characters
            SET name = ?, description = ?, image = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, description, image
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.image)
        .bind(self.clock.now().to_rfc3339())
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("update_character", e))?;

        row.as_ref().map(row_to_character).transpose()
    }

    async fn delete(&self, id: &CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query(
            "DELETE FROM characters WHERE id = ? RETURNING id, name, description, image",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("delete_character", e))?;

        row.as_ref().map(row_to_character).transpose()
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}
