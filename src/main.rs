//! Project Service (v1)
//!
//! A minimal CRUD service for projects, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http::server (request id, trace, timeout)  │
//!                         │        │                                     │
//!                         │        ▼                                     │
//!                         │   http::handlers ──▶ projects::validation    │
//!                         │        │                                     │
//!                         │        ▼                                     │
//!     Client Response     │   projects::store (RwLock<Vec<Project>>)     │
//!     ◀───────────────────┼── http::response ({"message": ...} errors)   │
//!                         │                                              │
//!                         │   config · observability · lifecycle         │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! The collection lives in memory and resets on every restart.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use project_service::config::ServiceConfig;
use project_service::http::HttpServer;
use project_service::lifecycle::{resolve_config, Shutdown};
use project_service::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "project-service")]
#[command(about = "In-memory CRUD service for projects", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:3000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: ServiceConfig = resolve_config(args.config.as_deref(), args.bind.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by config validation.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
