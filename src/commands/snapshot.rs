//! Snapshot command handler.
//!
//! Prints generated samples without opening the dashboard, for scripting.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::ArgMatches;
use colored::*;
use serde::Serialize;

use crate::core::config::DashboardConfig;
use crate::core::derived::{HealthReport, HealthStatus, SecuritySummary};
use crate::core::scheduler::TelemetryEvent;
use crate::core::store::DashboardState;
use crate::core::telemetry::MetricSample;
use crate::error::CyberSysError;

/// One printed sample
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub sequence: usize,
    pub timestamp: DateTime<Local>,
    pub metrics: MetricSample,
    pub health: HealthReport,
    pub security: SecuritySummary,
    pub process_count: usize,
}

/// Execute the snapshot command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let count = matches.get_one::<usize>("count").copied().unwrap_or(1);
    let interval = matches.get_one::<u64>("interval").copied().unwrap_or(1000);
    let json_output = matches.get_flag("json");

    if count == 0 {
        return Err(CyberSysError::config("--count must be at least 1").into());
    }

    let mut state = DashboardState::new(DashboardConfig::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for sequence in 1..=count {
        if sequence > 1 {
            thread::sleep(Duration::from_millis(interval));
            state.apply(TelemetryEvent::MetricsTick);
            state.apply(TelemetryEvent::ProcessTick);
        }

        let snapshot = take_snapshot(&state, sequence, Local::now());
        log::debug!("Snapshot {} overall {}", sequence, snapshot.health.overall.label());
        write_snapshot(&mut out, &snapshot, json_output).context("Failed to write snapshot")?;
    }

    Ok(())
}

pub fn take_snapshot(state: &DashboardState, sequence: usize, timestamp: DateTime<Local>) -> Snapshot {
    Snapshot {
        sequence,
        timestamp,
        metrics: *state.metrics.current(),
        health: state.health(),
        security: state.security(),
        process_count: state.processes.processes().len(),
    }
}

/// Write one snapshot as a JSON line or as colored text
pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    json: bool,
) -> crate::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
        return Ok(());
    }

    let overall = snapshot.health.overall;
    writeln!(
        out,
        "{} {}  {} {}",
        format!("#{}", snapshot.sequence).bold(),
        snapshot.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
        "health".bold(),
        status_text(overall, &format!("{} ({})", overall.label(), overall.score())),
    )?;

    for reading in &snapshot.health.indicators {
        writeln!(
            out,
            "  {:<14} {:>8}  {}",
            reading.kind.label(),
            format!("{:.1}{}", reading.value, reading.kind.unit()),
            status_text(reading.status, reading.status.label()),
        )?;
    }

    let security = &snapshot.security;
    let suspicious = format!("{} suspicious", security.suspicious_count);
    writeln!(
        out,
        "  {} {} processes, {} admin, {} unsigned, {} ({:.1}% trusted)",
        "security".bold(),
        snapshot.process_count,
        security.admin_count,
        security.unsigned_count,
        if security.suspicious_count > 0 {
            suspicious.red()
        } else {
            suspicious.green()
        },
        security.trust_percent(),
    )?;

    Ok(())
}

fn status_text(status: HealthStatus, text: &str) -> ColoredString {
    match status {
        HealthStatus::Good => text.green(),
        HealthStatus::Warning => text.yellow(),
        HealthStatus::Critical => text.red().bold(),
    }
}
