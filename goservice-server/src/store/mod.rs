//! Item stores - the boundary between HTTP handlers and the data source
//!
//! Handlers only see [`ItemStore`]. Whether items come from PostgreSQL or
//! from the fixed fallback dataset is decided once at startup by [`open`].

pub mod fallback;
pub mod pool;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{DatabaseConfig, StoreKind};
use crate::models::Item;

pub use fallback::{fallback_items, StaticItemStore};
pub use postgres::PgItemStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no database connection is configured")]
    Unavailable,

    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Anything that can list go-category items
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Short name for logs
    fn kind(&self) -> &'static str;

    /// List every item of category `go`, ordered by id.
    ///
    /// Either the complete result or an error; never a partial list.
    async fn list_go_items(&self) -> Result<Vec<Item>, StoreError>;

    /// Release held resources. Called once at shutdown.
    async fn close(&self) {}
}

/// Open the configured store.
///
/// Never fails: an unreachable database still yields a store whose
/// queries fail individually.
pub async fn open(kind: StoreKind, database: &DatabaseConfig) -> Arc<dyn ItemStore> {
    match kind {
        StoreKind::Postgres => Arc::new(PgItemStore::connect(database).await),
        StoreKind::Static => Arc::new(StaticItemStore),
    }
}
