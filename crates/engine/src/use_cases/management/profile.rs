//! Read-only profile lookups over the built-in dataset.

use roster_domain::{seed_profiles, CharacterProfile};

use super::ManagementError;

pub struct ProfileQueries {
    profiles: &'static [CharacterProfile],
}

impl ProfileQueries {
    pub fn new(profiles: &'static [CharacterProfile]) -> Self {
        Self { profiles }
    }

    pub fn list(&self) -> &'static [CharacterProfile] {
        self.profiles
    }

    pub fn get(&self, id: &str) -> Result<&'static CharacterProfile, ManagementError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ManagementError::not_found("Profile", id))
    }
}

impl Default for ProfileQueries {
    fn default() -> Self {
        Self::new(seed_profiles())
    }
}
