//! Fetch metrics
//!
//! Recorded through the `metrics` facade; a no-op unless the embedding
//! application installs a recorder.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// One fetch cycle against the price source
    Fetch,
}

/// Counter metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMetric {
    /// Fetch cycle ended in `Loaded`
    FetchLoaded,
    /// Fetch cycle ended in `Failed`, labelled with the error kind
    FetchFailed(&'static str),
    /// Refresh dropped because a fetch was in flight
    RefreshIgnored,
}

impl LatencyMetric {
    pub fn name(self) -> &'static str {
        match self {
            LatencyMetric::Fetch => "arzesh_fetch_latency_ms",
        }
    }
}

impl CounterMetric {
    pub fn name(self) -> &'static str {
        match self {
            CounterMetric::FetchLoaded | CounterMetric::FetchFailed(_) => "arzesh_fetch_total",
            CounterMetric::RefreshIgnored => "arzesh_refresh_ignored_total",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    ::metrics::histogram!(metric.name()).record(duration.as_secs_f64() * 1000.0);
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric) {
    match metric {
        CounterMetric::FetchLoaded => {
            ::metrics::counter!(metric.name(), "outcome" => "loaded").increment(1);
        }
        CounterMetric::FetchFailed(kind) => {
            ::metrics::counter!(metric.name(), "outcome" => kind).increment(1);
        }
        CounterMetric::RefreshIgnored => {
            ::metrics::counter!(metric.name()).increment(1);
        }
    }
}
