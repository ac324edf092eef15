//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

const FETCH_LATENCY: &str = "btcbot_price_fetch_latency_ms";
const FETCH_FAILURES: &str = "btcbot_price_fetch_failures_total";
const COMMANDS: &str = "btcbot_commands_total";
const STATUS_TICKS: &str = "btcbot_status_ticks_total";

/// Start the Prometheus scrape endpoint. Needs a running tokio runtime.
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}

/// Record a successful price fetch round trip
pub fn record_fetch_latency(duration: Duration) {
    ::metrics::histogram!(FETCH_LATENCY).record(duration.as_secs_f64() * 1000.0);
}

/// Count a failed price fetch by error kind
pub fn record_fetch_failure(kind: &'static str) {
    ::metrics::counter!(FETCH_FAILURES, "kind" => kind).increment(1);
}

/// Count a handled chat command
pub fn record_command(command: &'static str) {
    ::metrics::counter!(COMMANDS, "command" => command).increment(1);
}

/// Count a status refresh tick by outcome
pub fn record_tick(outcome: &'static str) {
    ::metrics::counter!(STATUS_TICKS, "outcome" => outcome).increment(1);
}
