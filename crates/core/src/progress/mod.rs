//! Progress module - derived goal progress view.

mod progress_model;
mod progress_service;

pub use progress_model::GoalProgress;
pub use progress_service::{ProgressService, ProgressServiceTrait};
