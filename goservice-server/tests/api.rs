//! Router-level tests for go-service
//!
//! Drives the axum router in-process with substitute item stores.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use futures::future::join_all;
use serde_json::{json, Value};
use tower::ServiceExt;

use goservice_server::{
    build_router, AppState, Item, ItemStore, PgItemStore, StaticItemStore, StoreError,
};

// =============================================================================
// Test stores
// =============================================================================

/// Always fails, like a dropped connection
struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    fn kind(&self) -> &'static str {
        "failing"
    }

    async fn list_go_items(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Query(sqlx::Error::PoolTimedOut))
    }
}

/// Returns a fixed list, whatever it contains
struct FixedStore(Vec<Item>);

#[async_trait]
impl ItemStore for FixedStore {
    fn kind(&self) -> &'static str {
        "fixed"
    }

    async fn list_go_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.0.clone())
    }
}

/// Each call yields one item whose id is the call number
#[derive(Default)]
struct CountingStore {
    calls: AtomicI64,
}

#[async_trait]
impl ItemStore for CountingStore {
    fn kind(&self) -> &'static str {
        "counting"
    }

    async fn list_go_items(&self) -> Result<Vec<Item>, StoreError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::task::yield_now().await;
        Ok(vec![Item::new(call, format!("call {call}"), "go")])
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn app(store: impl ItemStore) -> Router {
    build_router(AppState::new(Arc::new(store)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Health and hello
// =============================================================================

#[tokio::test]
async fn health_is_ok_for_every_store() {
    for app in [app(StaticItemStore), app(FailingStore), app(PgItemStore::unavailable())] {
        let (status, body) = get(&app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "go-service");

        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}

#[tokio::test]
async fn hello_returns_exact_payload_every_time() {
    let app = app(FailingStore);
    for _ in 0..3 {
        let (status, body) = get(&app, "/api/go/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Hello from Go service!", "version": "1.0.0"})
        );
    }
}

// =============================================================================
// Data
// =============================================================================

#[tokio::test]
async fn failing_store_yields_fixed_500() {
    let (status, body) = get(&app(FailingStore), "/api/go/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch data from database"}));
}

#[tokio::test]
async fn store_without_connection_yields_fixed_500() {
    let (status, body) = get(&app(PgItemStore::unavailable()), "/api/go/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch data from database"}));
}

#[tokio::test]
async fn empty_store_yields_empty_array() {
    let (status, body) = get(&app(FixedStore(Vec::new())), "/api/go/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn other_categories_never_appear() {
    let store = FixedStore(vec![
        Item::new(1, "gopher", "go"),
        Item::new(2, "npm", "node"),
        Item::new(3, "ferris", "rust"),
        Item::new(4, "goroutine", "go"),
    ]);

    let (status, body) = get(&app(store), "/api/go/data").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    let ids: Vec<_> = data.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 4]);
    assert!(data.iter().all(|i| i["type"] == "go"));
}

#[tokio::test]
async fn static_store_serves_fallback_dataset() {
    let (status, body) = get(&app(StaticItemStore), "/api/go/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": [
            {"id": 1, "name": "Item A", "type": "go"},
            {"id": 2, "name": "Item B", "type": "go"},
            {"id": 3, "name": "Item C", "type": "go"},
        ]})
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn static_store_is_stable_under_concurrency() {
    let app = app(StaticItemStore);
    let expected = get(&app, "/api/go/data").await;

    let responses = join_all((0..32).map(|_| {
        let app = app.clone();
        async move { get(&app, "/api/go/data").await }
    }))
    .await;

    for response in responses {
        assert_eq!(response, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_fetch_independently() {
    let app = app(CountingStore::default());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { get(&app, "/api/go/data").await })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        let (status, body) = handle.await.expect("task panicked");
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        seen.insert(data[0]["id"].as_i64().unwrap());
    }

    let expected: HashSet<i64> = (1..=16).collect();
    assert_eq!(seen, expected);
}

// =============================================================================
// Routing and CORS
// =============================================================================

#[tokio::test]
async fn unknown_route_is_404() {
    let response = app(StaticItemStore)
        .oneshot(Request::builder().uri("/api/rust/data").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let response = app(StaticItemStore)
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/go/data")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
}

#[tokio::test]
async fn simple_request_carries_cors_origin() {
    let response = app(StaticItemStore)
        .oneshot(
            Request::builder()
                .uri("/api/go/hello")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
