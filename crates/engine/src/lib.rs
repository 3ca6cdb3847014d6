//! Roster engine library.
//!
//! This crate contains all server-side code for the character catalog.
//!
//! ## Structure
//!
//! - `use_cases/` - Validation, catalog CRUD, image intake, contact relay
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
