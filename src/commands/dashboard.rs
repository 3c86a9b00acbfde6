//! Dashboard command handler.
//!
//! Opens the full-screen dashboard.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::{DashboardConfig, Theme};
use crate::ui::dashboard_tui::run_dashboard_app;

/// Execute the dashboard command; `None` means no arguments were given
pub fn execute(matches: Option<&ArgMatches>) -> Result<()> {
    let config = match matches {
        Some(matches) => config_from_matches(matches)?,
        None => DashboardConfig::default(),
    };

    run_dashboard_app(config).context("Failed to run dashboard")
}

/// Apply command-line overrides to the default configuration
pub fn config_from_matches(matches: &ArgMatches) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::default();

    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.metrics_interval_ms = *interval;
    }
    if let Some(interval) = matches.get_one::<u64>("process-interval") {
        config.process_interval_ms = *interval;
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.settings.theme = theme.parse::<Theme>()?;
    }

    config.validate()?;
    Ok(config)
}
