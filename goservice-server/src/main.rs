use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use goservice_server::tracing_setup::{self, TracingConfig};
use goservice_server::{run_server, store, AppState, ServerConfig, ServiceArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so its values act as environment defaults
    let dotenv = dotenvy::dotenv();
    let args = ServiceArgs::parse();

    tracing_setup::init(&TracingConfig { debug: args.debug })?;
    match dotenv {
        Ok(path) => info!("Loaded configuration from {}", path.display()),
        Err(err) => warn!("Could not load .env file: {}", err),
    }

    let store = store::open(args.store, &args.database).await;
    info!(store = store.kind(), "Item store ready");

    let config = ServerConfig {
        bind_addr: args.bind_addr(),
    };
    let result = run_server(AppState::new(store.clone()), config).await;

    store.close().await;
    result.context("server error")?;
    Ok(())
}
