//! Port traits for infrastructure boundaries.
//!
//! The catalog, image intake and contact relay only see these traits:
//! - `CharacterRepo`: keyed catalog storage (SQLite or in-memory)
//! - `AssetStore`: where uploaded image bytes end up
//! - `ContactRelay`: the outbound mail API
//! - `ClockPort` / `RandomPort`: time and id generation, swapped in tests

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::CharacterRepo;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{AssetStore, ContactRelay, ContactSubmission, ImageUpload};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockCharacterRepo;

#[cfg(test)]
pub use external::{MockAssetStore, MockContactRelay};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{AssetError, RelayError, RepoError};
