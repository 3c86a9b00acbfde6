// UI and formatting module

pub mod dashboard_tui;
pub mod formatters;

pub use formatters::{format_bytes, format_megabytes, format_time_ago, format_uptime};
