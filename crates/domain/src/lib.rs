//! Roster domain layer.
//!
//! Pure types shared by the engine: the catalog's `Character` record, its
//! identifier, write payloads, and the fixed set of read-only profiles.
//! Nothing in here performs I/O.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;

pub use common::TextInput;
pub use entities::{seed_profiles, Character, CharacterDraft, CharacterFields, CharacterProfile};
pub use error::DomainError;
pub use ids::CharacterId;
