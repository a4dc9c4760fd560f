//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define request metrics (count, latency) by operation and outcome
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `calc_requests_total` (counter): requests by operation, outcome
//! - `calc_request_duration_seconds` (histogram): handler latency by operation

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "calc_requests_total";
pub const REQUEST_DURATION: &str = "calc_request_duration_seconds";

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
///
/// `outcome` is `"ok"` or a `CalcError::kind` label.
pub fn record_request(operation: &str, outcome: &'static str, start: Instant) {
    let operation = operation.to_string();
    metrics::counter!(REQUESTS_TOTAL, "operation" => operation.clone(), "outcome" => outcome)
        .increment(1);
    metrics::histogram!(REQUEST_DURATION, "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}
