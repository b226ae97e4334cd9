//! Database connection pool management
//!
//! The pool is created lazily so that an unreachable server never blocks
//! startup; connections are opened on first use.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::warn;

/// Create a lazily-connecting PostgreSQL pool.
///
/// `acquire_timeout` bounds how long a query waits for a connection,
/// including retries against a server that refuses connections.
/// A `max_connections` of zero is raised to one; sqlx cannot build an
/// empty pool.
pub fn create_lazy_pool(
    options: PgConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> PgPool {
    let max_connections = if max_connections == 0 {
        warn!("DB_MAX_CONNECTIONS must be at least 1, using 1");
        1
    } else {
        max_connections
    };

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options)
}

/// Round-trip a trivial query to check the server is reachable.
pub async fn probe(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
