//! Tick scheduler.
//!
//! Owns a small Tokio runtime that drives three independent timers (metric sampling,
//! process drift, wall clock) plus the delayed simulated actions. Everything it produces
//! arrives as a [`TelemetryEvent`] on one channel, drained by a single update loop.

mod tasks;

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

use crate::core::config::DashboardConfig;
use crate::error::{CyberSysError, Result};
use tasks::{action_task, ticker_task};

const EVENT_CHANNEL_CAPACITY: usize = 64;
const ACTION_CHANNEL_CAPACITY: usize = 16;

/// What the update loop is asked to apply
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryEvent {
    /// Take a fresh metric sample
    MetricsTick,
    /// Drift process cpu/memory
    ProcessTick,
    /// Wall clock advanced
    ClockTick(DateTime<Local>),
    /// A kill request's delay elapsed
    ProcessKilled(u32),
    /// A cleanup request's delay elapsed
    CacheCleaned(Vec<String>),
}

/// Simulated actions that complete after a fixed delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    KillProcess(u32),
    CleanCache(Vec<String>),
}

pub struct TelemetryScheduler {
    event_rx: mpsc::Receiver<TelemetryEvent>,
    action_tx: mpsc::Sender<ActionRequest>,
    shutdown_tx: broadcast::Sender<()>,
    runtime: tokio::runtime::Runtime,
}

impl TelemetryScheduler {
    /// Build the runtime and spawn every timer.
    pub fn start(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("telemetry-scheduler")
            .build()
            .map_err(|e| CyberSysError::runtime(format!("failed to build runtime: {}", e)))?;

        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        runtime.spawn(ticker_task(
            "metrics",
            config.metrics_interval(),
            || TelemetryEvent::MetricsTick,
            event_tx.clone(),
            shutdown_tx.subscribe(),
        ));

        runtime.spawn(ticker_task(
            "processes",
            config.process_interval(),
            || TelemetryEvent::ProcessTick,
            event_tx.clone(),
            shutdown_tx.subscribe(),
        ));

        runtime.spawn(ticker_task(
            "clock",
            config.clock_interval(),
            || TelemetryEvent::ClockTick(Local::now()),
            event_tx.clone(),
            shutdown_tx.subscribe(),
        ));

        runtime.spawn(action_task(
            action_rx,
            event_tx,
            config.kill_delay(),
            config.clean_delay(),
            shutdown_tx.subscribe(),
        ));

        log::info!("Telemetry scheduler started");

        Ok(Self {
            event_rx,
            action_tx,
            shutdown_tx,
            runtime,
        })
    }

    /// Queue a simulated action. Fails only if the scheduler is gone or saturated.
    pub fn request(&self, action: ActionRequest) -> Result<()> {
        self.action_tx
            .try_send(action)
            .map_err(|e| CyberSysError::runtime(format!("action not queued: {}", e)))
    }

    /// Next pending event, without waiting
    pub fn try_next(&mut self) -> Option<TelemetryEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Every event that is pending right now, in arrival order
    pub fn drain(&mut self) -> Vec<TelemetryEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_next() {
            events.push(event);
        }
        events
    }

    /// Block the calling thread until an event arrives or `timeout` passes.
    /// Must not be called from inside an async context.
    pub fn next_event_timeout(&mut self, timeout: Duration) -> Option<TelemetryEvent> {
        let event_rx = &mut self.event_rx;
        self.runtime.block_on(async move {
            tokio::time::timeout(timeout, event_rx.recv())
                .await
                .ok()
                .flatten()
        })
    }

    pub fn shutdown(self) {
        log::info!("Shutting down telemetry scheduler");
        let _ = self.shutdown_tx.send(());
        self.runtime.shutdown_timeout(Duration::from_millis(200));
    }
}
