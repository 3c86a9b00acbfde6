//! Synthetic telemetry.
//!
//! Stands in for OS introspection: every metric, process and log entry shown by the
//! dashboard is produced here, either once at startup or on a scheduler tick.

pub mod catalog;
mod generator;
mod history;
mod metrics;

pub use generator::{
    TelemetryGenerator, CPU_DRIFT, CPU_RANGE, DISK_RANGE, MEMORY_DRIFT, NETWORK_RANGE,
    PROCESS_NAMES, RAM_RANGE, TEMPERATURE_RANGE,
};
pub use history::{MetricsHistory, DEFAULT_HISTORY_SIZE};
pub use metrics::{
    CacheItem, CacheKind, EventLogEntry, EventType, MetricSample, ProcessRecord, ProcessStatus,
    StartupAppEntry, StartupEventRule, StartupImpact, SystemSpecs, NETWORK_DOMAIN_MAX_KBPS,
};
