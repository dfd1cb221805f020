use std::sync::Arc;

use crate::{error::ApiResult, AppState};
use alcancia_core::contributions::{Contribution, NewContribution};
use alcancia_core::progress::GoalProgress;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Wire shape of the progress endpoint.
///
/// Field names and the string-formatted two-decimal percentage are kept
/// exactly as historically emitted, for existing clients.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub goal_id: String,
    pub titulo: String,
    pub total_aportado: f64,
    pub monto_objetivo: f64,
    pub porcentaje_avance: String,
}

impl From<GoalProgress> for ProgressView {
    fn from(p: GoalProgress) -> Self {
        Self {
            goal_id: p.goal_id,
            titulo: p.title,
            total_aportado: p.total_contributed,
            monto_objetivo: p.target_amount,
            porcentaje_avance: format!("{:.2}", p.percent_complete),
        }
    }
}

async fn create_contribution(
    State(state): State<Arc<AppState>>,
    Json(contribution): Json<NewContribution>,
) -> ApiResult<(StatusCode, Json<Contribution>)> {
    let c = state
        .contribution_service
        .create_contribution(contribution)
        .await?;
    Ok((StatusCode::CREATED, Json(c)))
}

async fn get_contributions_by_goal(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Contribution>>> {
    let mut contributions = state
        .contribution_service
        .get_contributions_by_goal(&goal_id)?;
    // Newest first for display.
    contributions.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(Json(contributions))
}

async fn delete_contribution(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.contribution_service.delete_contribution(id).await?;
    Ok(Json(json!({ "message": "Contribution deleted" })))
}

async fn get_progress(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProgressView>> {
    let progress = state.progress_service.get_progress(&goal_id)?;
    Ok(Json(ProgressView::from(progress)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contributions", post(create_contribution))
        .route("/contributions/goal/{goalId}", get(get_contributions_by_goal))
        .route("/contributions/progress/{goalId}", get(get_progress))
        .route("/contributions/{id}", delete(delete_contribution))
}
