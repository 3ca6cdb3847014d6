//! Domain entities.

pub mod character;
pub mod profile;

pub use character::{Character, CharacterDraft, CharacterFields};
pub use profile::{seed_profiles, CharacterProfile};
