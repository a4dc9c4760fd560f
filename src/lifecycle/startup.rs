//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the metrics recorder when enabled
//! - Spawn the signal handler
//! - Bind the listener (plain TCP or TLS) and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Logging is initialized by the caller before this runs

use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::tls::load_tls_config;
use crate::observability::metrics;

/// Run the service with a validated configuration until a stop signal.
pub async fn run(config: ServiceConfig) -> Result<(), Box<dyn Error>> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(config.clone());

    match &config.listener.tls {
        Some(tls) => {
            let addr: SocketAddr = config.listener.bind_address.parse()?;
            let tls_config =
                load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await?;
            tracing::info!(address = %addr, "Listening for TLS connections");
            server.run_tls(addr, tls_config, server_shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, server_shutdown).await?;
        }
    }

    Ok(())
}
