//! Random stand-ins for hardware sensors.
//!
//! Every value is an independent uniform draw: no smoothing, no correlation between fields.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use super::metrics::{MetricSample, ProcessRecord, ProcessStatus};

pub const CPU_RANGE: Range<f64> = 0.0..100.0;
pub const RAM_RANGE: Range<f64> = 40.0..80.0;
pub const DISK_RANGE: Range<f64> = 20.0..50.0;
pub const NETWORK_RANGE: Range<f64> = 0.0..1000.0;
pub const TEMPERATURE_RANGE: Range<f64> = 40.0..70.0;

const INITIAL_PROCESS_CPU: Range<f64> = 0.0..30.0;
const INITIAL_PROCESS_MEMORY: Range<f64> = 0.0..500.0;

/// Half-widths of the per-tick process drift
pub const CPU_DRIFT: f64 = 5.0;
pub const MEMORY_DRIFT: f64 = 25.0;

const FIRST_PID: u32 = 1000;
const PID_STRIDE: u32 = 123;

pub const PROCESS_NAMES: [&str; 16] = [
    "Chrome",
    "Firefox",
    "VSCode",
    "Spotify",
    "Discord",
    "Slack",
    "Teams",
    "Node",
    "Python",
    "Explorer",
    "SystemService",
    "Antivirus",
    "BackgroundTask",
    "UpdateService",
    "DriverHost",
    "RuntimeBroker",
];

pub struct TelemetryGenerator {
    rng: StdRng,
}

impl TelemetryGenerator {
    /// Generator seeded from the OS, so runs are not reproducible
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn sample_metrics(&mut self) -> MetricSample {
        MetricSample {
            cpu_percent: self.rng.random_range(CPU_RANGE),
            ram_percent: self.rng.random_range(RAM_RANGE),
            disk_percent: self.rng.random_range(DISK_RANGE),
            network_kbps: self.rng.random_range(NETWORK_RANGE),
            temperature_celsius: self.rng.random_range(TEMPERATURE_RANGE),
        }
    }

    /// Build the fixed process table, one record per entry of [`PROCESS_NAMES`].
    pub fn initial_processes(&mut self) -> Vec<ProcessRecord> {
        PROCESS_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| ProcessRecord {
                pid: FIRST_PID + i as u32 * PID_STRIDE,
                name: (*name).to_string(),
                cpu_percent: self.rng.random_range(INITIAL_PROCESS_CPU),
                memory_mb: self.rng.random_range(INITIAL_PROCESS_MEMORY),
                status: if self.rng.random_bool(0.9) {
                    ProcessStatus::Running
                } else {
                    ProcessStatus::Sleeping
                },
                user: if self.rng.random_bool(0.5) {
                    "User".to_string()
                } else {
                    "SYSTEM".to_string()
                },
                is_admin: self.rng.random_bool(0.3),
                is_signed: self.rng.random_bool(0.8),
            })
            .collect()
    }

    /// Drift cpu and memory of every record, floored at zero.
    pub fn perturb_processes(&mut self, processes: &mut [ProcessRecord]) {
        for process in processes.iter_mut() {
            let cpu_delta = self.rng.random_range(-CPU_DRIFT..CPU_DRIFT);
            let memory_delta = self.rng.random_range(-MEMORY_DRIFT..MEMORY_DRIFT);
            process.cpu_percent = (process.cpu_percent + cpu_delta).max(0.0);
            process.memory_mb = (process.memory_mb + memory_delta).max(0.0);
        }
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ranges() {
        let mut generator = TelemetryGenerator::seeded(7);
        for _ in 0..2000 {
            let sample = generator.sample_metrics();
            assert!(CPU_RANGE.contains(&sample.cpu_percent));
            assert!(RAM_RANGE.contains(&sample.ram_percent));
            assert!(DISK_RANGE.contains(&sample.disk_percent));
            assert!(NETWORK_RANGE.contains(&sample.network_kbps));
            assert!(TEMPERATURE_RANGE.contains(&sample.temperature_celsius));
        }
    }

    #[test]
    fn test_initial_processes_layout() {
        let mut generator = TelemetryGenerator::seeded(1);
        let processes = generator.initial_processes();

        assert_eq!(processes.len(), PROCESS_NAMES.len());
        assert_eq!(processes[0].pid, 1000);
        assert_eq!(processes[1].pid, 1123);
        assert_eq!(processes[15].pid, 1000 + 15 * 123);

        let pids: HashSet<u32> = processes.iter().map(|p| p.pid).collect();
        assert_eq!(pids.len(), processes.len());

        for p in &processes {
            assert!(INITIAL_PROCESS_CPU.contains(&p.cpu_percent));
            assert!(INITIAL_PROCESS_MEMORY.contains(&p.memory_mb));
            assert_ne!(p.status, ProcessStatus::Stopped);
            assert!(p.user == "User" || p.user == "SYSTEM");
        }
    }

    #[test]
    fn test_perturbation_floor_and_bounds() {
        let mut generator = TelemetryGenerator::seeded(3);
        let mut processes = generator.initial_processes();
        for p in processes.iter_mut() {
            p.cpu_percent = 0.0;
            p.memory_mb = 0.0;
        }

        for _ in 0..50 {
            let before = processes.clone();
            generator.perturb_processes(&mut processes);
            for (old, new) in before.iter().zip(&processes) {
                assert!(new.cpu_percent >= 0.0);
                assert!(new.memory_mb >= 0.0);
                assert!((new.cpu_percent - old.cpu_percent).abs() <= CPU_DRIFT);
                assert!((new.memory_mb - old.memory_mb).abs() <= MEMORY_DRIFT);
                assert_eq!(old.pid, new.pid);
            }
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = TelemetryGenerator::seeded(42);
        let mut b = TelemetryGenerator::seeded(42);
        assert_eq!(a.sample_metrics(), b.sample_metrics());
    }
}
