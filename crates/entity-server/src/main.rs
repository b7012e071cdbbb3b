//! Entity Service server binary
//!
//! Boots the in-memory table store and serves the entity CRUD routes.

use anyhow::{Context, Result};
use entity_core::MemoryTableStore;
use entity_server::{router, AppState, Config};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Entity Service v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env();

    let store = Arc::new(MemoryTableStore::new());
    let state = AppState::new(store, &config.partition_key);
    let app = router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
