//! Progress domain model.

use serde::{Deserialize, Serialize};

/// Derived view combining a goal's target with the sum of its contributions.
///
/// Not persisted; computed on demand. `percent_complete` is clamped to 100
/// and rounded to two decimals, `total_contributed` is never clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    pub total_contributed: f64,
    pub target_amount: f64,
    pub percent_complete: f64,
}
