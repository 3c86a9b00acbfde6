use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::core::derived::HealthConfig;
use crate::core::telemetry::DEFAULT_HISTORY_SIZE;
use crate::error::{CyberSysError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    #[default]
    Cyberpunk,
    Midnight,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Cyberpunk, Theme::Midnight];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Cyberpunk => "Cyberpunk",
            Theme::Midnight => "Midnight",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Cyberpunk,
            Theme::Cyberpunk => Theme::Midnight,
            Theme::Midnight => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = CyberSysError;

    fn from_str(s: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CyberSysError::config(format!(
                    "Unknown theme '{}' (expected dark, cyberpunk or midnight)",
                    s
                ))
            })
    }
}

/// Preferences edited in the settings modal. Held in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub start_with_system: bool,
    pub minimize_to_tray: bool,
    pub show_notifications: bool,
    /// When off, metric and process ticks are ignored
    pub auto_refresh: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_with_system: false,
            minimize_to_tray: true,
            show_notifications: true,
            auto_refresh: true,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    StartWithSystem,
    MinimizeToTray,
    ShowNotifications,
    AutoRefresh,
    Theme,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::StartWithSystem,
        SettingsField::MinimizeToTray,
        SettingsField::ShowNotifications,
        SettingsField::AutoRefresh,
        SettingsField::Theme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::StartWithSystem => "Start with system",
            SettingsField::MinimizeToTray => "Minimize to tray",
            SettingsField::ShowNotifications => "Show notifications",
            SettingsField::AutoRefresh => "Auto refresh",
            SettingsField::Theme => "Theme",
        }
    }
}

impl Settings {
    /// Flip a boolean field, or advance the theme
    pub fn toggle(&mut self, field: SettingsField) {
        match field {
            SettingsField::StartWithSystem => self.start_with_system = !self.start_with_system,
            SettingsField::MinimizeToTray => self.minimize_to_tray = !self.minimize_to_tray,
            SettingsField::ShowNotifications => {
                self.show_notifications = !self.show_notifications
            }
            SettingsField::AutoRefresh => self.auto_refresh = !self.auto_refresh,
            SettingsField::Theme => self.theme = self.theme.next(),
        }
    }

    pub fn display_value(&self, field: SettingsField) -> String {
        let on_off = |v: bool| if v { "on" } else { "off" }.to_string();
        match field {
            SettingsField::StartWithSystem => on_off(self.start_with_system),
            SettingsField::MinimizeToTray => on_off(self.minimize_to_tray),
            SettingsField::ShowNotifications => on_off(self.show_notifications),
            SettingsField::AutoRefresh => on_off(self.auto_refresh),
            SettingsField::Theme => self.theme.label().to_string(),
        }
    }
}

/// Timing and threshold configuration of a dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub metrics_interval_ms: u64,
    pub process_interval_ms: u64,
    pub clock_interval_ms: u64,
    pub kill_delay_ms: u64,
    pub clean_delay_ms: u64,
    pub history_capacity: usize,
    pub health: HealthConfig,
    pub settings: Settings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            metrics_interval_ms: 1000,
            process_interval_ms: 2000,
            clock_interval_ms: 1000,
            kill_delay_ms: 500,
            clean_delay_ms: 2000,
            history_capacity: DEFAULT_HISTORY_SIZE,
            health: HealthConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        let intervals = [
            ("metrics interval", self.metrics_interval_ms),
            ("process interval", self.process_interval_ms),
            ("clock interval", self.clock_interval_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(CyberSysError::config(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }

        if self.history_capacity == 0 {
            return Err(CyberSysError::config(
                "history capacity must be greater than zero",
            ));
        }

        for (kind, thresholds) in self.health.iter() {
            if thresholds.warning >= thresholds.critical {
                return Err(CyberSysError::config(format!(
                    "{} warning threshold ({}) must be below critical ({})",
                    kind.label(),
                    thresholds.warning,
                    thresholds.critical
                )));
            }
        }

        Ok(())
    }

    pub fn metrics_interval(&self) -> Duration {
        Duration::from_millis(self.metrics_interval_ms)
    }

    pub fn process_interval(&self) -> Duration {
        Duration::from_millis(self.process_interval_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn kill_delay(&self) -> Duration {
        Duration::from_millis(self.kill_delay_ms)
    }

    pub fn clean_delay(&self) -> Duration {
        Duration::from_millis(self.clean_delay_ms)
    }
}
