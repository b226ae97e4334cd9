//! Greeting endpoint

use axum::{routing::get, Json, Router};

use crate::models::HelloResponse;

/// GET /api/go/hello
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse::default())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/go/hello", get(hello))
}
