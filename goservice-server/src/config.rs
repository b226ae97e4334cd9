//! Service configuration
//!
//! Every setting can be given as a flag or an environment variable and
//! falls back to a default when both are absent. The binary loads `.env`
//! before parsing, so values from that file behave like the process
//! environment.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use tracing::warn;

/// Default maximum connections for the pool.
/// Every query is a single short read, so a small pool is enough.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Seconds to wait for a pooled connection before a query fails.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Which item store backs `/api/go/data`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Live PostgreSQL `items` table
    Postgres,
    /// Fixed in-memory fallback dataset
    Static,
}

/// go-service command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "go-service",
    version,
    about = "Read-only HTTP service for go-category items"
)]
pub struct ServiceArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3002)]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Item store backing the data endpoint
    #[arg(long, env = "ITEM_STORE", value_enum, default_value_t = StoreKind::Postgres)]
    pub store: StoreKind,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServiceArgs {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// PostgreSQL connection settings, each defaulted on its own
#[derive(Args, Debug, Clone)]
pub struct DatabaseConfig {
    #[arg(long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-name", env = "DB_NAME", default_value = "radicl_db")]
    pub name: String,

    #[arg(long = "db-user", env = "DB_USER", default_value = "radicl_user")]
    pub user: String,

    #[arg(
        long = "db-password",
        env = "DB_PASSWORD",
        default_value = "radicl_password",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// libpq-style ssl mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long = "db-sslmode", env = "DB_SSLMODE", default_value = "disable")]
    pub sslmode: String,

    /// Full connection URL; overrides the individual settings above
    #[arg(long = "database-url", env = "DATABASE_URL", hide_env_values = true)]
    pub url: Option<String>,

    /// Maximum number of pooled connections (at least 1)
    #[arg(
        long = "db-max-connections",
        env = "DB_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Seconds to wait for a connection (also bounds the startup probe)
    #[arg(
        long = "db-acquire-timeout",
        env = "DB_ACQUIRE_TIMEOUT",
        default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS
    )]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Parsed ssl mode. Unknown values fall back to `disable`.
    pub fn ssl_mode(&self) -> PgSslMode {
        PgSslMode::from_str(&self.sslmode).unwrap_or_else(|_| {
            warn!(sslmode = %self.sslmode, "Unknown DB_SSLMODE, using disable");
            PgSslMode::Disable
        })
    }

    /// Build connect options, preferring `DATABASE_URL` when present.
    ///
    /// # Errors
    ///
    /// Returns an error only when the URL cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(self.ssl_mode()))
    }
}
