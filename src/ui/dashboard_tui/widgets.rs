use ratatui::{prelude::*, widgets::Gauge};

use crate::core::config::Theme;
use crate::core::derived::{HealthStatus, SecurityLevel};
use crate::core::telemetry::{EventType, StartupImpact};

/// Border and title color of the active theme
pub fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Gray,
        Theme::Cyberpunk => Color::Cyan,
        Theme::Midnight => Color::LightBlue,
    }
}

/// Color for a load percentage: red above 80, yellow above 50
pub fn load_color(percent: f64) -> Color {
    match percent {
        p if p > 80.0 => Color::Red,
        p if p > 50.0 => Color::Yellow,
        _ => Color::Green,
    }
}

/// Create a gauge with color based on value thresholds
pub fn colored_gauge<'a>(percent: f64, label: String) -> Gauge<'a> {
    Gauge::default()
        .gauge_style(Style::default().fg(load_color(percent)).bg(Color::Black))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label)
}

/// Text bar of `width` cells filled in proportion to `percent`
pub fn cpu_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn temp_color(celsius: f64) -> Color {
    match celsius {
        t if t > 85.0 => Color::Red,
        t if t > 70.0 => Color::LightYellow,
        _ => Color::Cyan,
    }
}

pub fn health_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Good => Color::Green,
        HealthStatus::Warning => Color::Yellow,
        HealthStatus::Critical => Color::Red,
    }
}

pub fn security_color(level: SecurityLevel) -> Color {
    match level {
        SecurityLevel::Good => Color::Green,
        SecurityLevel::Warning => Color::Yellow,
        SecurityLevel::Alert => Color::Red,
    }
}

pub fn event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Critical => Color::Red,
        EventType::Error => Color::LightRed,
        EventType::Warning => Color::Yellow,
        EventType::Info => Color::Cyan,
    }
}

pub fn impact_color(impact: StartupImpact) -> Color {
    match impact {
        StartupImpact::Low => Color::Green,
        StartupImpact::Medium => Color::Yellow,
        StartupImpact::High => Color::Red,
    }
}

/// Row style under the cursor
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// First row to draw so that `cursor` stays inside a window of `height` rows
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}
