//! Derived state.
//!
//! Pure projections over a telemetry snapshot: given the same input they return the same
//! output, and none of them touch the terminal.

mod cache_selection;
mod event_filter;
pub mod health;
mod process_view;
mod security;

pub use cache_selection::{selected_size, total_size, CacheSelection};
pub use event_filter::{count_events, filter_events, EventCounts, LogFilter};
pub use health::{
    evaluate_health, overall_status, HealthConfig, HealthReport, HealthStatus, IndicatorKind,
    IndicatorReading, Thresholds,
};
pub use process_view::{
    filter_processes, process_view, sort_processes, ProcessSort, SortDirection, SortField,
};
pub use security::{
    admin_processes, summarize_security, suspicious_processes, SecurityLevel, SecuritySummary,
};
