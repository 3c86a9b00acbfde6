//! Fixed datasets shown by the dashboard: specs, startup entries, event log, cache locations.

use chrono::{DateTime, Duration, Local};

use super::metrics::{
    CacheItem, CacheKind, EventLogEntry, EventType, StartupAppEntry, StartupEventRule,
    StartupImpact, SystemSpecs,
};

pub fn system_specs() -> SystemSpecs {
    SystemSpecs {
        cpu: "AMD Ryzen 9 5900X @ 3.7GHz (12C/24T)".to_string(),
        gpu: "NVIDIA GeForce RTX 3080 (10GB GDDR6X)".to_string(),
        ram: "32GB DDR4-3600 (2x16GB)".to_string(),
        motherboard: "ASUS ROG Crosshair VIII Hero".to_string(),
        os: "Windows 11 Pro (Build 22631.3447)".to_string(),
        uptime: "4d 12h 34m".to_string(),
        power_on_hours: 8432,
    }
}

pub fn startup_apps() -> Vec<StartupAppEntry> {
    let entry = |id: &str, name: &str, path: &str, enabled: bool, impact: StartupImpact| {
        StartupAppEntry {
            id: id.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            enabled,
            impact,
        }
    };

    vec![
        entry(
            "1",
            "Discord",
            r"C:\Users\User\AppData\Local\Discord\Update.exe",
            true,
            StartupImpact::Medium,
        ),
        entry(
            "2",
            "Spotify",
            r"C:\Users\User\AppData\Roaming\Spotify\Spotify.exe",
            true,
            StartupImpact::Low,
        ),
        entry(
            "3",
            "Steam",
            r"C:\Program Files\Steam\Steam.exe",
            false,
            StartupImpact::High,
        ),
        entry(
            "4",
            "OneDrive",
            r"C:\Program Files\Microsoft OneDrive\OneDrive.exe",
            true,
            StartupImpact::Medium,
        ),
        entry(
            "5",
            "Nvidia GeForce",
            r"C:\Program Files\NVIDIA\NvContainer.exe",
            true,
            StartupImpact::Low,
        ),
    ]
}

/// Rule present on first launch
pub fn default_startup_rules() -> Vec<StartupEventRule> {
    vec![StartupEventRule {
        id: "1".to_string(),
        trigger_app: "CyberSys Monitor".to_string(),
        launch_app: "Discord".to_string(),
        delay_seconds: 5,
    }]
}

/// Event log entries, timestamped relative to `now`.
pub fn event_logs(now: DateTime<Local>) -> Vec<EventLogEntry> {
    let entry = |id: &str, event_type: EventType, source: &str, message: &str, age: Duration| {
        EventLogEntry {
            id: id.to_string(),
            event_type,
            source: source.to_string(),
            message: message.to_string(),
            timestamp: now - age,
        }
    };

    vec![
        entry(
            "1",
            EventType::Error,
            "Application",
            "Chrome crashed unexpectedly",
            Duration::hours(1),
        ),
        entry(
            "2",
            EventType::Warning,
            "System",
            "High CPU usage detected for extended period",
            Duration::hours(2),
        ),
        entry(
            "3",
            EventType::Info,
            "Windows Update",
            "Updates installed successfully",
            Duration::days(1),
        ),
        entry(
            "4",
            EventType::Critical,
            "Kernel-Power",
            "System recovered from unexpected shutdown",
            Duration::days(2),
        ),
        entry(
            "5",
            EventType::Warning,
            "Disk",
            "Low disk space on drive C:",
            Duration::days(3),
        ),
        entry(
            "6",
            EventType::Info,
            "Security",
            "Windows Defender scan completed",
            Duration::days(4),
        ),
        entry(
            "7",
            EventType::Error,
            "Application",
            "VSCode extension failed to load",
            Duration::days(5),
        ),
    ]
}

pub fn cache_items() -> Vec<CacheItem> {
    let item = |id: &str, name: &str, path: &str, size_bytes: u64, kind: CacheKind| CacheItem {
        id: id.to_string(),
        name: name.to_string(),
        path: path.to_string(),
        size_bytes,
        kind,
        can_delete: true,
    };

    vec![
        item(
            "1",
            "Windows Temp",
            r"C:\Windows\Temp",
            1_240_000_000,
            CacheKind::Temp,
        ),
        item(
            "2",
            "User Temp",
            r"C:\Users\User\AppData\Local\Temp",
            2_560_000_000,
            CacheKind::Temp,
        ),
        item(
            "3",
            "Chrome Cache",
            r"C:\Users\User\AppData\Local\Google\Chrome\User Data\Default\Cache",
            890_000_000,
            CacheKind::Browser,
        ),
        item(
            "4",
            "Edge Cache",
            r"C:\Users\User\AppData\Local\Microsoft\Edge\User Data\Default\Cache",
            450_000_000,
            CacheKind::Browser,
        ),
        item(
            "5",
            "Discord Cache",
            r"C:\Users\User\AppData\Roaming\discord\Cache",
            320_000_000,
            CacheKind::App,
        ),
        item(
            "6",
            "Spotify Cache",
            r"C:\Users\User\AppData\Local\Spotify\Storage",
            1_800_000_000,
            CacheKind::App,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let logs = event_logs(Local::now());
        let ids: HashSet<_> = logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), logs.len());

        let items = cache_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());

        let apps = startup_apps();
        let ids: HashSet<_> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), apps.len());
    }

    #[test]
    fn test_event_log_is_in_the_past() {
        let now = Local::now();
        for log in event_logs(now) {
            assert!(log.timestamp < now);
        }
    }

    #[test]
    fn test_cache_total() {
        let total: u64 = cache_items().iter().map(|i| i.size_bytes).sum();
        assert_eq!(total, 7_260_000_000);
    }
}
