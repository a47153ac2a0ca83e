//! Corkboard HTTP server.
//!
//! Usage:
//!
//! ```text
//! corkboard [--bind ADDR] [--base-path PATH] [--database-url URL] [--pool-size N]
//! ```
//!
//! Every flag can also be supplied through the environment (see
//! [`corkboard::config::ServerConfig`]). Without a database URL the server
//! keeps boards in memory for the lifetime of the process.

use clap::Parser;
use corkboard::{
    config::ServerConfig,
    http::{AppState, router},
    kanban::{
        adapters::{memory::InMemoryKanbanStore, postgres::PostgresKanbanStore},
        ports::KanbanStore,
    },
    telemetry,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init()?;

    let Some(database_url) = config.database_url.clone() else {
        warn!("no database URL configured; boards are kept in memory");
        return serve(InMemoryKanbanStore::new(), &config).await;
    };
    let pool_size = config.pool_size;
    let store = tokio::task::spawn_blocking(move || {
        PostgresKanbanStore::connect(&database_url, pool_size)
    })
    .await??;
    info!(pool_size, "connected to PostgreSQL");
    serve(store, &config).await
}

async fn serve<S: KanbanStore>(store: S, config: &ServerConfig) -> Result<(), BoxError> {
    let app = router(AppState::new(store), &config.base_path);
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        address = %listener.local_addr()?,
        base_path = %config.base_path,
        "corkboard listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("corkboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
