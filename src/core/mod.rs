// Core business logic module

pub mod config;
pub mod derived;
pub mod scheduler;
pub mod store;
pub mod telemetry;

// Re-export commonly used items
pub use config::{DashboardConfig, Settings, Theme};
pub use scheduler::{ActionRequest, TelemetryEvent, TelemetryScheduler};
pub use store::DashboardState;
