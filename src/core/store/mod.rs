//! In-memory state holders.
//!
//! One store per dashboard area, all owned by [`DashboardState`]. The update loop is the
//! only writer: it feeds scheduler events through [`DashboardState::apply`] and passes
//! `&DashboardState` to whatever renders.

mod cache_store;
mod metrics_store;
mod process_store;
mod startup_store;

pub use cache_store::{CacheStore, CleanupStats, CLEAN_BANNER_DURATION};
pub use metrics_store::{InfoStore, MetricsStore};
pub use process_store::ProcessStore;
pub use startup_store::StartupStore;

use chrono::Local;
use std::time::Instant;

use crate::core::config::{DashboardConfig, Settings};
use crate::core::derived::{evaluate_health, summarize_security, HealthReport, SecuritySummary};
use crate::core::scheduler::{ActionRequest, TelemetryEvent};
use crate::core::telemetry::{catalog, EventLogEntry, TelemetryGenerator};

pub struct DashboardState {
    generator: TelemetryGenerator,
    pub metrics: MetricsStore,
    pub processes: ProcessStore,
    pub startup: StartupStore,
    pub cache: CacheStore,
    pub info: InfoStore,
    event_logs: Vec<EventLogEntry>,
    pub settings: Settings,
    config: DashboardConfig,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_generator(config, TelemetryGenerator::new())
    }

    /// Build every store from `generator`; tests pass a seeded one
    pub fn with_generator(config: DashboardConfig, mut generator: TelemetryGenerator) -> Self {
        let now = Local::now();
        let first_sample = generator.sample_metrics();
        let processes = generator.initial_processes();

        Self {
            metrics: MetricsStore::new(first_sample, config.history_capacity),
            processes: ProcessStore::new(processes),
            startup: StartupStore::new(catalog::startup_apps(), catalog::default_startup_rules()),
            cache: CacheStore::new(catalog::cache_items()),
            info: InfoStore::new(catalog::system_specs(), now),
            event_logs: catalog::event_logs(now),
            settings: config.settings,
            generator,
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn event_logs(&self) -> &[EventLogEntry] {
        &self.event_logs
    }

    pub fn apply(&mut self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::MetricsTick => {
                if self.settings.auto_refresh {
                    let sample = self.generator.sample_metrics();
                    self.metrics.record(sample);
                }
            }
            TelemetryEvent::ProcessTick => {
                if self.settings.auto_refresh {
                    self.processes.perturb(&mut self.generator);
                }
            }
            TelemetryEvent::ClockTick(now) => self.info.tick(now),
            TelemetryEvent::ProcessKilled(pid) => {
                if self.processes.finish_kill(pid).is_none() {
                    log::debug!("Kill completion for unknown pid {}", pid);
                }
            }
            TelemetryEvent::CacheCleaned(ids) => {
                self.cache.finish_clean(&ids, Instant::now());
            }
        }
    }

    /// Undo the pending state of an action the scheduler never received
    pub fn abort_action(&mut self, action: &ActionRequest) {
        match action {
            ActionRequest::KillProcess(pid) => {
                self.processes.cancel_kill(*pid);
            }
            ActionRequest::CleanCache(_) => self.cache.abort_clean(),
        }
    }

    pub fn security(&self) -> SecuritySummary {
        summarize_security(self.processes.processes())
    }

    pub fn health(&self) -> HealthReport {
        evaluate_health(self.metrics.current(), &self.config.health)
    }
}
