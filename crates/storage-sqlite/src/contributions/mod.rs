//! SQLite storage implementation for contributions.

mod model;
mod repository;

pub use model::ContributionDB;
pub use repository::ContributionRepository;
