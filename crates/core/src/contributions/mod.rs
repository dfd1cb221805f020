//! Contributions module - domain models, services, and traits.

mod contributions_model;
mod contributions_service;
mod contributions_traits;

pub use contributions_model::{Contribution, NewContribution};
pub use contributions_service::ContributionService;
pub use contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
