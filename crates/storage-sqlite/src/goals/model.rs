//! Database models for goals.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::parse_rfc3339;
use alcancia_core::goals::{Goal, NewGoal};

/// Database model for goals
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
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to/from domain models

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            target_amount: db.target_amount,
            image_url: db.image_url,
            created_at: parse_rfc3339(&db.created_at, "created_at"),
            updated_at: parse_rfc3339(&db.updated_at, "updated_at"),
        }
    }
}

impl From<NewGoal> for GoalDB {
    fn from(domain: NewGoal) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: domain.title,
            target_amount: domain.target_amount,
            image_url: domain.image_url,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
