//! Item model and response envelopes

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The only category this service lists
pub const GO_CATEGORY: &str = "go";

/// Service identifier reported by the health check
pub const SERVICE_NAME: &str = "go-service";

/// API version reported by the hello endpoint
pub const API_VERSION: &str = "1.0.0";

pub const HELLO_MESSAGE: &str = "Hello from Go service!";

/// A row of the `items` table.
///
/// The table column `type` is exposed as `category` in Rust and keeps its
/// original name on the wire. `description` and `created_at` are absent
/// from the fallback dataset, which predates those columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Item without description or timestamp
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: None,
            created_at: None,
        }
    }

    pub fn is_go(&self) -> bool {
        self.category == GO_CATEGORY
    }
}

/// `GET /api/health` body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy_at(now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// `GET /api/go/hello` body
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub version: &'static str,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            message: HELLO_MESSAGE,
            version: API_VERSION,
        }
    }
}

/// `GET /api/go/data` body
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: Vec<Item>,
}
