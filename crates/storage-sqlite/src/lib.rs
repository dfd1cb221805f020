//! SQLite storage implementation for Alcancía.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `alcancia-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for goals and contributions
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The `core` crate is database-agnostic and works with traits.

pub mod contributions;
pub mod db;
pub mod errors;
pub mod goals;
pub mod schema;
mod utils;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, spawn_writer, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::StorageError;

// Re-export from alcancia-core for convenience
pub use alcancia_core::errors::{DatabaseError, Error, Result};
