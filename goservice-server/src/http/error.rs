//! API error type with IntoResponse
//!
//! Clients only ever see the fixed envelope; causes stay in the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Message returned when the item store cannot answer
pub const DATA_FETCH_FAILED: &str = "Failed to fetch data from database";

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Store query failed (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Store(e) => {
                tracing::error!(error = %e, "Error querying item store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": DATA_FETCH_FAILED }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
