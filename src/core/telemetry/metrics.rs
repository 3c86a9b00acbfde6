use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One synthetic reading of the headline gauges.
///
/// Field domains are fixed by the generator:
/// `cpu_percent` in [0, 100), `ram_percent` in [40, 80), `disk_percent` in [20, 50),
/// `network_kbps` in [0, 1000) and `temperature_celsius` in [40, 70).
/// Network is a rate, not a percentage; gauges scale it against [`NETWORK_DOMAIN_MAX_KBPS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub disk_percent: f64,
    pub network_kbps: f64,
    pub temperature_celsius: f64,
}

pub const NETWORK_DOMAIN_MAX_KBPS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Running,
    Sleeping,
    Stopped,
}

impl ProcessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessStatus::Running => "running",
            ProcessStatus::Sleeping => "sleeping",
            ProcessStatus::Stopped => "stopped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_mb: f64,
    pub status: ProcessStatus,
    pub user: String,
    pub is_admin: bool,
    pub is_signed: bool,
}

impl ProcessRecord {
    /// Elevated and unsigned
    pub fn is_suspicious(&self) -> bool {
        self.is_admin && !self.is_signed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupImpact {
    Low,
    Medium,
    High,
}

impl StartupImpact {
    pub fn label(&self) -> &'static str {
        match self {
            StartupImpact::Low => "low",
            StartupImpact::Medium => "medium",
            StartupImpact::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupAppEntry {
    pub id: String,
    pub name: String,
    pub path: String,
    pub enabled: bool,
    pub impact: StartupImpact,
}

/// User-defined "when X starts, launch Y" association. Never executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupEventRule {
    pub id: String,
    pub trigger_app: String,
    pub launch_app: String,
    pub delay_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Critical,
    Error,
    Warning,
    Info,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Critical,
        EventType::Error,
        EventType::Warning,
        EventType::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Critical => "Critical",
            EventType::Error => "Error",
            EventType::Warning => "Warning",
            EventType::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id: String,
    pub event_type: EventType,
    pub source: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    Temp,
    Browser,
    App,
}

impl CacheKind {
    pub fn label(&self) -> &'static str {
        match self {
            CacheKind::Temp => "temp",
            CacheKind::Browser => "browser",
            CacheKind::App => "app",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheItem {
    pub id: String,
    pub name: String,
    pub path: String,
    pub size_bytes: u64,
    pub kind: CacheKind,
    pub can_delete: bool,
}

/// Static hardware description shown on the Info module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSpecs {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub motherboard: String,
    pub os: String,
    pub uptime: String,
    pub power_on_hours: u32,
}
