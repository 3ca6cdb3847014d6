//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod assets;
pub mod clock;
pub mod config;
pub mod persistence;
pub mod ports;
pub mod web3forms;
