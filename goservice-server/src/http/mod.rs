//! HTTP server layer
//!
//! Axum server with:
//! - Open CORS for the browser dashboard
//! - Request tracing
//! - Graceful shutdown
//! - Fixed JSON error envelopes

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
