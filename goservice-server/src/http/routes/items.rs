//! Item listing endpoint

use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{DataResponse, Item};

/// GET /api/go/data - every go-category item, ordered by id
async fn list_items(State(state): State<AppState>) -> Result<Json<DataResponse>, ApiError> {
    let mut items = state.store.list_go_items().await?;

    // Category invariant holds for any store, not only SQL-filtered ones
    let before = items.len();
    items.retain(Item::is_go);
    if items.len() != before {
        debug!(dropped = before - items.len(), "Dropped items outside the go category");
    }

    Ok(Json(DataResponse { data: items }))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/go/data", get(list_items))
}
