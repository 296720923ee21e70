//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_requests_total` (counter): proxied requests by method, status
//! - `proxy_request_duration_seconds` (histogram): time to upstream response headers
//! - `proxy_upstream_failures_total` (counter): transport failures by method
//! - `proxy_log_entries` (gauge): entries currently held in the event log
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
/// Must be called from within the tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start_time: Instant) {
    counter!(
        "proxy_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("proxy_request_duration_seconds", "method" => method.to_string())
        .record(start_time.elapsed().as_secs_f64());
}

pub fn record_upstream_failure(method: &str) {
    counter!("proxy_upstream_failures_total", "method" => method.to_string()).increment(1);
}

pub fn record_log_size(len: usize) {
    gauge!("proxy_log_entries").set(len as f64);
}
