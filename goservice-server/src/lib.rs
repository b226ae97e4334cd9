//! goservice-server: read-only HTTP service for go-category items
//!
//! Serves a health check, a fixed greeting and the list of `go` items.
//! Items come from PostgreSQL or, when configured, a static fallback
//! dataset; handlers see only the [`store::ItemStore`] trait.

pub mod config;
pub mod http;
pub mod models;
pub mod store;
pub mod tracing_setup;

pub use config::{DatabaseConfig, ServiceArgs, StoreKind};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::Item;
pub use store::{ItemStore, PgItemStore, StaticItemStore, StoreError};
