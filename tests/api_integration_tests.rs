//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, including the
//! discard notification surfaced by PUT /set.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use policy_cache::{api::create_router, cache::PolicyCache, AppState, PolicyKind};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app_with(kind: PolicyKind, capacity: usize) -> Router {
    let cache = PolicyCache::new(kind, capacity);
    let state = AppState::new(cache);
    create_router(state)
}

fn create_test_app() -> Router {
    create_test_app_with(PolicyKind::Lru, 4)
}

fn set_request(key: &str, value: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({"key": key, "value": value})).unwrap(),
        ))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(set_request("test_key", json!("test_value")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("test_key"));
    assert!(body["evicted"].is_null());
}

#[tokio::test]
async fn test_set_endpoint_empty_key_rejected() {
    let app = create_test_app();

    let response = app.oneshot(set_request("", json!("value"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_set_endpoint_null_value_absorbed() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(set_request("null_key", Value::Null))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("ignored"));

    // Nothing was stored
    let response = app
        .oneshot(
            Request::builder()
                .uri("/get/null_key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_endpoint_reports_discard() {
    let app = create_test_app_with(PolicyKind::Fifo, 2);

    for (key, value) in [("a", json!(1)), ("b", json!(2))] {
        let response = app.clone().oneshot(set_request(key, value)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Third insert overflows: FIFO discards "a"
    let response = app.oneshot(set_request("c", json!(3))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["evicted"], json!("a"));
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app();

    let set_response = app
        .clone()
        .oneshot(set_request("get_key", json!({"nested": true})))
        .await
        .unwrap();
    assert_eq!(set_response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get/get_key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["key"], json!("get_key"));
    assert_eq!(body["value"], json!({"nested": true}));
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_to_json(response.into_body()).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_get_refreshes_lru_position() {
    let app = create_test_app_with(PolicyKind::Lru, 2);

    for (key, value) in [("a", json!(1)), ("b", json!(2))] {
        app.clone().oneshot(set_request(key, value)).await.unwrap();
    }

    // Touch "a" so "b" becomes the LRU victim
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/get/a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(set_request("c", json!(3)))
        .await
        .unwrap();
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["evicted"], json!("b"));

    // "a" survived
    let response = app
        .oneshot(
            Request::builder()
                .uri("/get/a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_counts_operations() {
    let app = create_test_app();

    app.clone()
        .oneshot(set_request("key1", json!("value1")))
        .await
        .unwrap();

    // One hit
    app.clone()
        .oneshot(
            Request::builder()
                .uri("/get/key1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // One miss
    app.clone()
        .oneshot(
            Request::builder()
                .uri("/get/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["hits"], json!(1));
    assert_eq!(body["misses"], json!(1));
    assert_eq!(body["total_entries"], json!(1));
    assert_eq!(body["hit_rate"], json!(0.5));
}

// == Config Endpoint Tests ==

#[tokio::test]
async fn test_config_endpoint_reports_policy() {
    let app = create_test_app_with(PolicyKind::Lfu, 4);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["policy"], json!("lfu"));
    assert_eq!(body["capacity"], json!(4));
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], json!("healthy"));
    assert!(body.get("timestamp").is_some());
}
