//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bridge_messages_routed_total` (counter, by kind): recognized and handled
//! - `bridge_messages_ignored_total` (counter): unknown kinds, dropped silently
//! - `bridge_messages_malformed_total` (counter): known kind, bad payload
//!
//! # Design Decisions
//! - Counters only; this layer has no latency worth a histogram
//! - Exposition endpoint is opt-in via config

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and start the scrape endpoint.
///
/// Called at most once, at startup, when metrics are enabled in config.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start metrics endpoint");
        }
    }
}
