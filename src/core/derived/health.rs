//! Health classification.
//!
//! Maps each indicator to a severity tier and reduces them to an overall status.
//! Thresholds are strict: a value equal to a threshold stays on the lower tier.

use serde::{Deserialize, Serialize};

use crate::core::telemetry::MetricSample;

/// Connectivity is not simulated; the indicator always reports this score
pub const NETWORK_CONNECTIVITY_SCORE: f64 = 85.0;

/// Suspicious processes are reported on the Security module, not folded into health
pub const SECURITY_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }

    /// Headline score of the Status module
    pub fn score(&self) -> u8 {
        match self {
            HealthStatus::Good => 100,
            HealthStatus::Warning => 75,
            HealthStatus::Critical => 50,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthStatus::Good => "All systems healthy",
            HealthStatus::Warning => "Some metrics elevated",
            HealthStatus::Critical => "System needs attention!",
        }
    }
}

/// Warning/critical pair for one indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Thresholds {
    pub const fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }

    pub fn classify(&self, value: f64) -> HealthStatus {
        if value > self.critical {
            HealthStatus::Critical
        } else if value > self.warning {
            HealthStatus::Warning
        } else {
            HealthStatus::Good
        }
    }
}

/// Threshold table for the sampled indicators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    pub cpu: Thresholds,
    pub ram: Thresholds,
    pub disk: Thresholds,
    pub temperature: Thresholds,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            cpu: Thresholds::new(70.0, 90.0),
            ram: Thresholds::new(75.0, 90.0),
            disk: Thresholds::new(80.0, 95.0),
            temperature: Thresholds::new(70.0, 85.0),
        }
    }
}

impl HealthConfig {
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKind, &Thresholds)> {
        [
            (IndicatorKind::Cpu, &self.cpu),
            (IndicatorKind::Ram, &self.ram),
            (IndicatorKind::Disk, &self.disk),
            (IndicatorKind::Temperature, &self.temperature),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    Cpu,
    Ram,
    Disk,
    Temperature,
    Network,
    Security,
}

impl IndicatorKind {
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Cpu => "CPU Load",
            IndicatorKind::Ram => "Memory Usage",
            IndicatorKind::Disk => "Disk Activity",
            IndicatorKind::Temperature => "Temperature",
            IndicatorKind::Network => "Network",
            IndicatorKind::Security => "Security",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            IndicatorKind::Temperature => "°C",
            _ => "%",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IndicatorKind::Cpu => "Current processor utilization",
            IndicatorKind::Ram => "RAM consumption",
            IndicatorKind::Disk => "Storage I/O activity",
            IndicatorKind::Temperature => "System temperature",
            IndicatorKind::Network => "Network connectivity status",
            IndicatorKind::Security => "Security status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub kind: IndicatorKind,
    pub value: f64,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub indicators: Vec<IndicatorReading>,
    pub overall: HealthStatus,
}

/// Worst-of reduction; an empty input is good
pub fn overall_status<I>(statuses: I) -> HealthStatus
where
    I: IntoIterator<Item = HealthStatus>,
{
    statuses.into_iter().max().unwrap_or(HealthStatus::Good)
}

pub fn evaluate_health(sample: &MetricSample, config: &HealthConfig) -> HealthReport {
    let reading = |kind, value: f64, thresholds: &Thresholds| IndicatorReading {
        kind,
        value,
        status: thresholds.classify(value),
    };

    let indicators = vec![
        reading(IndicatorKind::Cpu, sample.cpu_percent, &config.cpu),
        reading(IndicatorKind::Ram, sample.ram_percent, &config.ram),
        reading(IndicatorKind::Disk, sample.disk_percent, &config.disk),
        reading(
            IndicatorKind::Temperature,
            sample.temperature_celsius,
            &config.temperature,
        ),
        IndicatorReading {
            kind: IndicatorKind::Network,
            value: NETWORK_CONNECTIVITY_SCORE,
            status: HealthStatus::Good,
        },
        IndicatorReading {
            kind: IndicatorKind::Security,
            value: SECURITY_SCORE,
            status: HealthStatus::Good,
        },
    ];

    let overall = overall_status(indicators.iter().map(|i| i.status));

    HealthReport {
        indicators,
        overall,
    }
}
