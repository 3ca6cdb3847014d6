//! Common utility functions shared across the Roster crates.
//!
//! Pure functions only - no side effects, no I/O.

pub mod input;
pub mod string;

pub use input::TextInput;
pub use string::{blank_to_none, is_blank, StringExt};
