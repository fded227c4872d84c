//! HTTP-level integration tests for `/add_meal` and `/evaluation`.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Meals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_meal_order_defaults_to_vegetarian() {
    let (app, _notifier) = build_test_app();
    let response = post_json(&app, "/add_meal", json!({ "room": 101 })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["room"], 101);
    assert_eq!(json["data"]["order"], "Vegetarian");
    assert!(json["data"]["ordered_at"].is_string());
}

#[tokio::test]
async fn test_meal_orders_filter_by_room() {
    let (app, _notifier) = build_test_app();
    post_json(&app, "/add_meal", json!({ "room": 101, "order": "Halal" })).await;
    post_json(&app, "/add_meal", json!({ "room": 202, "order": "Vegan" })).await;
    post_json(&app, "/add_meal", json!({ "room": 101 })).await;

    let all = body_json(get(&app, "/add_meal").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let room = body_json(get(&app, "/add_meal/101").await).await;
    let orders: Vec<_> = room["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["order"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(orders, vec!["Vegetarian", "Halal"]);
}

#[tokio::test]
async fn test_meal_order_without_room_is_bad_request() {
    let (app, _notifier) = build_test_app();
    let response = post_json(&app, "/add_meal", json!({ "order": "Halal" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Evaluations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_evaluation_is_stored_and_listed() {
    let (app, _notifier) = build_test_app();
    let response = post_json(
        &app,
        "/evaluation",
        json!({ "room": 303, "symptom": true, "temperature": 38.2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["symptom"], true);
    assert_eq!(json["data"]["temperature"], 38.2);

    post_json(
        &app,
        "/evaluation",
        json!({ "room": 101, "symptom": false, "temperature": 36.5 }),
    )
    .await;

    let all = body_json(get(&app, "/evaluation").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let room = body_json(get(&app, "/evaluation/303").await).await;
    let items = room["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["room"], 303);
}

#[tokio::test]
async fn test_evaluation_requires_symptom_and_temperature() {
    let (app, _notifier) = build_test_app();
    let response = post_json(&app, "/evaluation", json!({ "room": 303, "temperature": 36.5 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_implausible_temperature_is_rejected() {
    let (app, _notifier) = build_test_app();
    let response = post_json(
        &app,
        "/evaluation",
        json!({ "room": 303, "symptom": false, "temperature": 98.6 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_evaluation_for_invalid_room_path_is_rejected() {
    let (app, _notifier) = build_test_app();
    let response = get(&app, "/evaluation/-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Root and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_root_connection_check() {
    let (app, _notifier) = build_test_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Connect successfully!");
}

#[tokio::test]
async fn test_health_reports_store() {
    let (app, _notifier) = build_test_app();
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_response_contains_x_request_id_header() {
    let (app, _notifier) = build_test_app();
    let response = get(&app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
    assert_eq!(request_id.unwrap().to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _notifier) = build_test_app();
    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
