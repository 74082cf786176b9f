use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use calc_web::{app, logger, WebConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebConfig::parse();
    logger::init_logger(config.verbose);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;
    tracing::info!(address = %config.address(), "Listening");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
