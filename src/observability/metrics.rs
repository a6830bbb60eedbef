//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locale_gate_decisions_total` (counter): gate outcomes by `outcome`, `source`
//! - `locale_gate_requests_total` (counter): forwarded requests by method, status
//! - `locale_gate_request_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Prometheus exporter serves its own scrape listener

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a gate decision (`redirect`, `cookie`, `path`, `out_of_scope`).
pub fn record_decision(outcome: &'static str, source: &'static str) {
    metrics::counter!(
        "locale_gate_decisions_total",
        "outcome" => outcome,
        "source" => source
    )
    .increment(1);
}

/// Record a forwarded request and its latency.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();
    metrics::counter!(
        "locale_gate_requests_total",
        "method" => method.clone(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "locale_gate_request_duration_seconds",
        "method" => method,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
