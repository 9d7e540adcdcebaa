//! Employee facade service.
//!
//! A stable REST surface for employee records that delegates persistence to
//! a separately versioned employee-data backend over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │                 EMPLOYEE FACADE                  │
//!                        │                                                  │
//!     Client Request     │  ┌─────────┐    ┌──────────┐    ┌────────────┐   │
//!     ───────────────────┼─▶│  http   │───▶│ employee │───▶│  upstream  │───┼──▶ Employee
//!                        │  │ router  │    │ service  │    │   client   │   │    backend
//!     Client Response    │  └─────────┘    └────┬─────┘    └────────────┘   │
//!     ◀──────────────────┼──── JSON ◀──────────┘                           │
//!                        │              translate / aggregate / errors      │
//!                        │                                                  │
//!                        │  config · observability · lifecycle              │
//!                        └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use employee_facade::config::resolve_config;
use employee_facade::lifecycle;
use employee_facade::observability::logging;

#[derive(Parser)]
#[command(name = "employee-facade")]
#[command(about = "REST facade over the employee-data backend", long_about = None)]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long, env = "EMPLOYEE_FACADE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability)?;

    tracing::info!("employee-facade v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
