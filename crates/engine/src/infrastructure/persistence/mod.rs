//! Catalog storage adapters.
//!
//! Both implement [`CharacterRepo`](crate::infrastructure::ports::CharacterRepo);
//! the backend is chosen at startup from `STORAGE_BACKEND`.

mod memory;
mod sqlite;

pub use memory::InMemoryCharacterRepo;
pub use sqlite::SqliteCharacterRepo;
