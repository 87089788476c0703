//! Telemetry module
//!
//! Logging and fetch metrics

mod logging;
mod metrics;

pub use self::metrics::{increment, record_latency, CounterMetric, LatencyMetric};
pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, LogFormat::from_json_flag(config.json))?;
    Ok(())
}
