//! Terminal dashboard.
//!
//! Renders the simulated telemetry with ratatui and turns key presses into store updates
//! or scheduler requests.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_dashboard_app, DashboardApp, EditTarget, Overlay, SystemModule, TopTab};
pub use event_handler::{map_key, DashboardEvent, KeyMode};
