//! Health check endpoint

use axum::{routing::get, Json, Router};
use chrono::Utc;

use crate::models::HealthResponse;

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy_at(Utc::now()))
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/health", get(health))
}
