//! # wcrm-api: Binary Entry Point
//!
//! Parses configuration, picks the store adapter (PostgreSQL when a
//! database URL is configured, in-memory otherwise), and serves until
//! Ctrl-C or SIGTERM. The store is closed after the server drains.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wcrm_api::config::{AppConfig, Cli, LogFormat};
use wcrm_api::state::AppState;
use wcrm_store::{DocumentStore, MemoryStore, PgDocumentStore, PgStoreOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_tracing(config.log_format);
    tracing::info!(?config, "starting wcrm-api");

    let store = open_store(&config).await?;
    let state = AppState::with_store(config.clone(), store.clone());
    let app = wcrm_api::app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "wcrm-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("wcrm-api stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match &config.database_url {
        Some(url) => {
            let options = PgStoreOptions {
                url: url.clone(),
                database_name: config.database_name.clone(),
                max_connections: config.max_connections,
            };
            let store = PgDocumentStore::connect(&options)
                .await
                .context("failed to open PostgreSQL document store")?;
            tracing::info!(database = %config.database_name, "using PostgreSQL document store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; documents are kept in memory and lost on exit");
            Ok(Arc::new(MemoryStore::with_database_name(
                config.database_name.clone(),
            )))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
