//! Alcancía Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the savings-goal
//! tracker. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod contributions;
pub mod errors;
pub mod goals;
pub mod progress;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
