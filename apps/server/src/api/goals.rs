use std::sync::Arc;

use crate::{error::ApiResult, AppState};
use alcancia_core::goals::{Goal, GoalUpdate, NewGoal};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.get_goal(&id)?;
    Ok(Json(goal))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let g = state.goal_service.create_goal(goal).await?;
    Ok((StatusCode::CREATED, Json(g)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.update_goal(id, update).await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.goal_service.delete_goal(id).await?;
    Ok(Json(
        json!({ "message": "Goal and its contributions deleted" }),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
}
