//! Telemetry module
//!
//! Metrics and logging

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{
    install_exporter, record_command, record_fetch_failure, record_fetch_latency, record_tick,
};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;

    if let Some(port) = config.metrics_port {
        install_exporter(port)?;
    }

    Ok(())
}
