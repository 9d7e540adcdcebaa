//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize metrics when enabled
//! - Build the upstream client and HTTP server
//! - Bind the listener and serve until a termination signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::FacadeConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::upstream::UpstreamError;

/// Fatal errors while bringing the service up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("upstream client: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the facade with an already validated configuration.
pub async fn start(config: FacadeConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        // Address validated with the rest of the configuration.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::warn!(
                address = %config.observability.metrics_address,
                "Metrics disabled: unparseable address"
            ),
        }
    }

    let server = HttpServer::new(config.clone())?;
    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}
