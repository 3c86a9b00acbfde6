use chrono::{DateTime, Local};
use humansize::{format_size, FormatSizeOptions, WINDOWS};

/// Format a byte count with base-1024 units and two decimals ("1.15 GB", "0 B")
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, FormatSizeOptions::from(WINDOWS).decimal_places(2))
}

/// Process memory is tracked in megabytes
pub fn format_megabytes(mb: f64) -> String {
    format_bytes((mb.max(0.0) * 1024.0 * 1024.0) as u64)
}

/// Coarse relative age of an event ("Just now", "3 hours ago")
pub fn format_time_ago(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86400)
    }
}

/// Session uptime as "{h}h {m}m {s}s"
pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
