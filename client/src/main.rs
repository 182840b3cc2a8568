//! Epigram sync agent - keeps a local quote collection reconciled with a
//! remote list.
//!
//! The agent loads (or seeds) the collection, then runs a reconciliation
//! round immediately and on a fixed interval until ctrl-c.

use epigram_client::{Config, FileStore, LogFrontend, Reconciler, RemoteClient, Scheduler};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epigram_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(
        "Starting Epigram sync agent against {} (every {:?})",
        config.server_url,
        config.sync_interval
    );

    let store = FileStore::open(&config.data_dir).await?;
    let remote = RemoteClient::new(&config.server_url, config.fetch_timeout)?;
    let reconciler = Arc::new(Reconciler::open(store, remote, Arc::new(LogFrontend)).await);

    tracing::info!(
        "Collection ready: {} quotes, category filter '{}'",
        reconciler.snapshot().await.len(),
        reconciler.last_category().await
    );

    let scheduler = Scheduler::start(config.sync_interval, {
        let reconciler = Arc::clone(&reconciler);
        move || {
            let reconciler = Arc::clone(&reconciler);
            async move {
                let _ = reconciler.sync().await;
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    scheduler.stop().await;

    Ok(())
}
