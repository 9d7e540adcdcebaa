//! Metrics collection and exposition.
//!
//! # Metrics
//! - `facade_requests_total` (counter): inbound requests by operation, status
//! - `facade_request_duration_seconds` (histogram): inbound latency
//! - `upstream_requests_total` (counter): upstream calls by operation, outcome
//! - `upstream_request_duration_seconds` (histogram): upstream latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one inbound operation.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    ::metrics::counter!(
        "facade_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("facade_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call.
pub fn record_upstream_call(operation: &'static str, outcome: &'static str, start: Instant) {
    ::metrics::counter!(
        "upstream_requests_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::histogram!("upstream_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}
