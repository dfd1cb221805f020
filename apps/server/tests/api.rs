//! End-to-end API tests against a throwaway SQLite database.

use alcancia_server::{api::app_router, build_state, config::Config};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

async fn build_test_router() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        db_path: tmp.path().join("test.db").to_str().unwrap().to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_goal(app: &Router, title: &str, target_amount: f64) -> Value {
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/goals",
            Some(json!({ "title": title, "targetAmount": target_amount })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_contribution(app: &Router, goal_id: &str, amount: f64) -> Value {
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/contributions",
            Some(json!({ "goalId": goal_id, "amount": amount })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (app, _tmp) = build_test_router().await;
    let response = app
        .oneshot(request(Method::GET, "/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn goal_crud_lifecycle() {
    let (app, _tmp) = build_test_router().await;

    let goal = create_goal(&app, "Bike", 200.0).await;
    let goal_id = goal["id"].as_str().unwrap().to_string();
    assert_eq!(goal["title"], "Bike");
    assert_eq!(goal["targetAmount"], 200.0);
    assert!(goal["imageUrl"].is_null());

    // List contains it
    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/goals", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let goals = body_json(response).await;
    assert_eq!(goals.as_array().unwrap().len(), 1);

    // Get by id
    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/api/goals/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update keeps the title
    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/api/goals/{}", goal_id),
            Some(json!({ "targetAmount": 300.0 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Bike");
    assert_eq!(updated["targetAmount"], 300.0);

    // Delete
    let response = app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/api/goals/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message = body_json(response).await;
    assert!(message["message"].is_string());

    // Gone from the list
    let response = app
        .oneshot(request(Method::GET, "/api/goals", None))
        .await
        .unwrap();
    let goals = body_json(response).await;
    assert!(goals.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn goal_validation_errors_are_400() {
    let (app, _tmp) = build_test_router().await;

    for bad_body in [
        json!({ "title": "", "targetAmount": 100.0 }),
        json!({ "title": "Bike", "targetAmount": 0.0 }),
        json!({ "title": "Bike", "targetAmount": -5.0 }),
    ] {
        let response = app
            .clone()
            .oneshot(request(Method::POST, "/api/goals", Some(bad_body.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", bad_body);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn missing_goal_is_404() {
    let (app, _tmp) = build_test_router().await;

    for (method, uri) in [
        (Method::GET, "/api/goals/ghost"),
        (Method::DELETE, "/api/goals/ghost"),
        (Method::GET, "/api/contributions/progress/ghost"),
    ] {
        let response = app
            .clone()
            .oneshot(request(method.clone(), uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
    }

    let response = app
        .oneshot(request(
            Method::PUT,
            "/api/goals/ghost",
            Some(json!({ "title": "New" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contribution_requires_existing_goal() {
    let (app, _tmp) = build_test_router().await;
    let response = app
        .oneshot(request(
            Method::POST,
            "/api/contributions",
            Some(json!({ "goalId": "ghost", "amount": 50.0 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contribution_rejects_bad_amount() {
    let (app, _tmp) = build_test_router().await;
    let goal = create_goal(&app, "Bike", 200.0).await;
    let goal_id = goal["id"].as_str().unwrap();

    let response = app
        .oneshot(request(
            Method::POST,
            "/api/contributions",
            Some(json!({ "goalId": goal_id, "amount": -1.0 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn progress_reaches_target_exactly() {
    // Scenario: 50 + 150 toward a 200 target.
    let (app, _tmp) = build_test_router().await;
    let goal = create_goal(&app, "Bike", 200.0).await;
    let goal_id = goal["id"].as_str().unwrap();

    create_contribution(&app, goal_id, 50.0).await;
    create_contribution(&app, goal_id, 150.0).await;

    let response = app
        .oneshot(request(
            Method::GET,
            &format!("/api/contributions/progress/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let progress = body_json(response).await;
    assert_eq!(progress["goalId"], *goal_id);
    assert_eq!(progress["titulo"], "Bike");
    assert_eq!(progress["totalAportado"], 200.0);
    assert_eq!(progress["montoObjetivo"], 200.0);
    assert_eq!(progress["porcentajeAvance"], "100.00");
}

#[tokio::test]
async fn progress_clamps_percent_but_not_total() {
    // Over-contribution: 150 toward a 100 target.
    let (app, _tmp) = build_test_router().await;
    let goal = create_goal(&app, "Trip", 100.0).await;
    let goal_id = goal["id"].as_str().unwrap();

    create_contribution(&app, goal_id, 150.0).await;

    let response = app
        .oneshot(request(
            Method::GET,
            &format!("/api/contributions/progress/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    let progress = body_json(response).await;
    assert_eq!(progress["totalAportado"], 150.0);
    assert_eq!(progress["porcentajeAvance"], "100.00");
}

#[tokio::test]
async fn contributions_list_newest_first() {
    let (app, _tmp) = build_test_router().await;
    let goal = create_goal(&app, "Bike", 200.0).await;
    let goal_id = goal["id"].as_str().unwrap();

    for (amount, date) in [
        (10.0, "2024-01-01T00:00:00Z"),
        (30.0, "2024-03-01T00:00:00Z"),
        (20.0, "2024-02-01T00:00:00Z"),
    ] {
        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/contributions",
                Some(json!({ "goalId": goal_id, "amount": amount, "date": date })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(request(
            Method::GET,
            &format!("/api/contributions/goal/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let contributions = body_json(response).await;
    let amounts: Vec<f64> = contributions
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["amount"].as_f64().unwrap())
        .collect();
    assert_eq!(amounts, vec![30.0, 20.0, 10.0]);
}

#[tokio::test]
async fn deleting_goal_cascades_to_contributions() {
    let (app, _tmp) = build_test_router().await;
    let goal = create_goal(&app, "Bike", 200.0).await;
    let goal_id = goal["id"].as_str().unwrap();

    create_contribution(&app, goal_id, 50.0).await;
    create_contribution(&app, goal_id, 150.0).await;

    let response = app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/api/goals/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            Method::GET,
            &format!("/api/contributions/goal/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let contributions = body_json(response).await;
    assert!(contributions.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_contribution_then_progress_updates() {
    let (app, _tmp) = build_test_router().await;
    let goal = create_goal(&app, "Bike", 200.0).await;
    let goal_id = goal["id"].as_str().unwrap();

    let contribution = create_contribution(&app, goal_id, 50.0).await;
    let contribution_id = contribution["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/api/contributions/{}", contribution_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deleting again is a 404.
    let response = app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/api/contributions/{}", contribution_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request(
            Method::GET,
            &format!("/api/contributions/progress/{}", goal_id),
            None,
        ))
        .await
        .unwrap();
    let progress = body_json(response).await;
    assert_eq!(progress["totalAportado"], 0.0);
    assert_eq!(progress["porcentajeAvance"], "0.00");
}
