//! Contributions domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single deposit applied toward a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub goal_id: String,
    pub amount: f64,
    pub note: Option<String>,
    pub date: DateTime<Utc>,
}

/// Input model for creating a new contribution.
///
/// `date` defaults to the current time when omitted.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub goal_id: String,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
