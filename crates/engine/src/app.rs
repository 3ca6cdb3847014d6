//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{AssetStore, CharacterRepo, ContactRelay, RandomPort};
use crate::use_cases;
use crate::use_cases::management::{CharacterCrud, ProfileQueries};

/// Main application state.
///
/// Holds the storage handle and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for storage handles whose lifecycle the app owns.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: use_cases::ManagementUseCases,
    pub images: use_cases::ImageIntake,
    pub contact: use_cases::ContactUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        asset_store: Arc<dyn AssetStore>,
        relay: Arc<dyn ContactRelay>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let management = use_cases::ManagementUseCases::new(
            CharacterCrud::new(character_repo.clone(), random),
            ProfileQueries::default(),
        );

        Self {
            repositories: Repositories {
                character: character_repo,
            },
            use_cases: UseCases {
                management,
                images: use_cases::ImageIntake::new(asset_store),
                contact: use_cases::ContactUseCases::new(relay),
            },
        }
    }

    /// Close the storage handle. Call once, after the server has stopped.
    pub async fn shutdown(&self) {
        self.repositories.character.close().await;
    }
}
