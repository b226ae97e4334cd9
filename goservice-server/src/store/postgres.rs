//! PostgreSQL item store
//!
//! Reads the `items` table through a shared pool:
//! - startup never fails, an unreachable server is logged and tolerated
//! - rows that fail to decode are skipped, not fatal to the response
//! - a failed query or cursor yields one error and no partial data

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{debug, info, warn};

use super::{pool, ItemStore, StoreError};
use crate::config::DatabaseConfig;
use crate::models::Item;

const LIST_GO_ITEMS: &str =
    "SELECT id, name, type, description, created_at FROM items WHERE type = 'go' ORDER BY id";

/// Item store backed by an optional PostgreSQL pool
#[derive(Clone)]
pub struct PgItemStore {
    pool: Option<PgPool>,
}

impl PgItemStore {
    /// Create the pool and probe it once.
    ///
    /// A failed probe is only a warning; later queries retry through the
    /// pool. Settings that cannot be turned into connect options leave the
    /// store without a pool.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let options = match config.connect_options() {
            Ok(options) => options,
            Err(err) => {
                warn!(error = %err, "Invalid database settings; data requests will fail");
                return Self::unavailable();
            }
        };

        let pool = pool::create_lazy_pool(
            options,
            config.max_connections,
            config.acquire_timeout(),
        );
        match pool::probe(&pool).await {
            Ok(()) => info!("Connected to PostgreSQL database"),
            Err(err) => {
                warn!(error = %err, "Unable to connect to database");
                warn!("Service will start anyway. Database operations may fail.");
            }
        }

        Self::from_pool(pool)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Store with no connection; every query returns [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self { pool: None }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn list_go_items(&self) -> Result<Vec<Item>, StoreError> {
        let pool = self.pool.as_ref().ok_or(StoreError::Unavailable)?;

        let mut rows = sqlx::query(LIST_GO_ITEMS).fetch(pool);
        let mut items = Vec::new();
        while let Some(row) = rows.try_next().await? {
            match decode_item(&row) {
                Ok(item) => items.push(item),
                Err(err) => warn!(error = %err, "Skipping undecodable row"),
            }
        }

        debug!(count = items.len(), "Fetched go items");
        Ok(items)
    }

    async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("Database pool closed");
        }
    }
}

/// Decode one row, accepting INT4/INT8 ids and TIMESTAMP/TIMESTAMPTZ times.
fn decode_item(row: &PgRow) -> Result<Item, sqlx::Error> {
    let id = match row.try_get::<i64, _>("id") {
        Ok(id) => id,
        Err(_) => i64::from(row.try_get::<i32, _>("id")?),
    };

    let created_at = match row.try_get::<DateTime<Utc>, _>("created_at") {
        Ok(ts) => ts,
        Err(_) => row.try_get::<NaiveDateTime, _>("created_at")?.and_utc(),
    };

    Ok(Item {
        id,
        name: row.try_get("name")?,
        category: row.try_get("type")?,
        description: row.try_get("description")?,
        created_at: Some(created_at),
    })
}
