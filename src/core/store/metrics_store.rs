use chrono::{DateTime, Local};

use crate::core::telemetry::{MetricSample, MetricsHistory, SystemSpecs};

/// Latest sample and its rolling history
#[derive(Debug, Clone)]
pub struct MetricsStore {
    current: MetricSample,
    history: MetricsHistory,
}

impl MetricsStore {
    pub fn new(initial: MetricSample, history_capacity: usize) -> Self {
        Self {
            current: initial,
            history: MetricsHistory::with_capacity(history_capacity),
        }
    }

    pub fn current(&self) -> &MetricSample {
        &self.current
    }

    pub fn history(&self) -> &MetricsHistory {
        &self.history
    }

    pub fn record(&mut self, sample: MetricSample) {
        self.current = sample;
        self.history.push(sample);
    }
}

/// Static specs, the wall clock and how long this session has been running
#[derive(Debug, Clone)]
pub struct InfoStore {
    pub specs: SystemSpecs,
    clock: DateTime<Local>,
    app_uptime_secs: u64,
}

impl InfoStore {
    pub fn new(specs: SystemSpecs, now: DateTime<Local>) -> Self {
        Self {
            specs,
            clock: now,
            app_uptime_secs: 0,
        }
    }

    pub fn clock(&self) -> DateTime<Local> {
        self.clock
    }

    pub fn app_uptime_secs(&self) -> u64 {
        self.app_uptime_secs
    }

    /// One clock tick: advance the uptime counter by a second
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.clock = now;
        self.app_uptime_secs += 1;
    }
}
