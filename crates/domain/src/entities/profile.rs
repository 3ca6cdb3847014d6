//! Read-only character profiles shipped with the service.
//!
//! These carry the richer trivia fields and are never persisted or mutated.

use serde::Serialize;

use crate::{Character, CharacterFields, CharacterId, DomainError};

/// Static reference record with game lore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub game: &'static str,
    pub description: &'static str,
    pub abilities: &'static str,
    pub trivia: &'static str,
    pub image: &'static str,
}

impl CharacterProfile {
    /// Project the profile onto a catalog record.
    pub fn to_character(&self) -> Result<Character, DomainError> {
        Ok(Character::new(
            CharacterId::parse(self.id)?,
            CharacterFields {
                name: self.name.to_string(),
                description: self.description.to_string(),
                image: self.image.to_string(),
            },
        ))
    }
}

const SEED_PROFILES: &[CharacterProfile] = &[
    CharacterProfile {
        id: "mario",
        name: "Mario",
        game: "Super Mario",
        description: "A plumber who goes on adventures to rescue Princess Peach.",
        abilities: "Superhuman agility, jumping, and power-ups like Fire Flower.",
        trivia: "His first appearance was in the 1981 arcade game Donkey Kong.",
        image: "images/mario.jpg",
    },
    CharacterProfile {
        id: "sonic",
        name: "Sonic",
        game: "Sonic the Hedgehog",
        description: "A speedy blue hedgehog who battles Dr. Eggman.",
        abilities: "Super speed, agility, and the Spin Dash.",
        trivia: "Sonic's original design was meant to rival Mario as a company mascot.",
        image: "images/sonic.jpg",
    },
    CharacterProfile {
        id: "link",
        name: "Link",
        game: "The Legend of Zelda",
        description: "A hero tasked with rescuing Princess Zelda and saving Hyrule.",
        abilities: "Mastery of various weapons, tools, and the Master Sword.",
        trivia: "Link is often mistaken for Zelda, the princess the series is named after.",
        image: "images/link.jpg",
    },
];

/// The fixed profile dataset, in declaration order.
pub fn seed_profiles() -> &'static [CharacterProfile] {
    SEED_PROFILES
}
