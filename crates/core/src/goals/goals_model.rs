//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub target_amount: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update for an existing goal; only supplied fields change.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}
