//! Calculator HTTP service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ─────────────▶ listener ─▶ middleware ─▶ extract ─▶ handlers ─▶ calc
//!                  (tcp/tls)   (request id,   (query /    (route     (operands,
//!                               trace, limit,  json)       group)     operation)
//!                               timeout)
//!   Client Response                                          │
//!   ◀──────────────────────────────────── response envelope ◀┘
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use calc_service::config::{load_config, ServiceConfig};
use calc_service::lifecycle::startup;
use calc_service::observability::logging;

#[derive(Parser)]
#[command(name = "calc-service")]
#[command(about = "Arithmetic and trigonometry over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        calc_service::config::validation::validate_config(&config)
            .map_err(calc_service::config::ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "calc-service starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
