//! Database models for contributions.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::parse_rfc3339;
use alcancia_core::contributions::{Contribution, NewContribution};

/// Database model for contributions
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::contributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ContributionDB {
    pub id: String,
    pub goal_id: String,
    pub amount: f64,
    pub note: Option<String>,
    pub date: String,
}

// Conversion to/from domain models

impl From<ContributionDB> for Contribution {
    fn from(db: ContributionDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            amount: db.amount,
            note: db.note,
            date: parse_rfc3339(&db.date, "date"),
        }
    }
}

impl From<NewContribution> for ContributionDB {
    fn from(domain: NewContribution) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal_id: domain.goal_id,
            amount: domain.amount,
            note: domain.note,
            date: domain.date.unwrap_or_else(Utc::now).to_rfc3339(),
        }
    }
}
