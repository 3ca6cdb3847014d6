//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Handlers call these,
//! never the ports directly.

pub mod assets;
pub mod contact;
pub mod management;
pub mod validation;

pub use assets::ImageIntake;
pub use contact::ContactUseCases;
pub use management::ManagementUseCases;
