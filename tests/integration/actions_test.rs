use std::time::{Duration, Instant};

use cybersys::core::config::DashboardConfig;
use cybersys::core::scheduler::TelemetryEvent;
use cybersys::core::store::{DashboardState, CLEAN_BANNER_DURATION};
use cybersys::core::telemetry::TelemetryGenerator;

fn state() -> DashboardState {
    DashboardState::with_generator(DashboardConfig::default(), TelemetryGenerator::seeded(77))
}

#[test]
fn test_clean_everything_leaves_nothing() {
    let mut state = state();
    let total = state.cache.total_size();
    assert!(total > 0);

    state.cache.toggle_all();
    assert_eq!(state.cache.selected_size(), total);

    let ids = state.cache.begin_clean().unwrap();
    assert!(state.cache.is_cleaning());
    state.apply(TelemetryEvent::CacheCleaned(ids));

    assert_eq!(state.cache.total_size(), 0);
    assert!(state.cache.items().is_empty());
    assert!(state.cache.selection.is_empty());
    assert!(!state.cache.is_cleaning());

    let stats = state.cache.recent_cleanup(Instant::now()).unwrap();
    assert_eq!(stats.freed_bytes, total);
}

#[test]
fn test_cleanup_banner_expires() {
    let mut state = state();
    let first = state.cache.items()[0].id.clone();
    state.cache.toggle(&first);
    let ids = state.cache.begin_clean().unwrap();
    state.apply(TelemetryEvent::CacheCleaned(ids));

    let later = Instant::now() + CLEAN_BANNER_DURATION + Duration::from_millis(10);
    assert!(state.cache.recent_cleanup(later).is_none());
}

#[test]
fn test_clean_without_selection_is_refused() {
    let mut state = state();
    assert!(state.cache.begin_clean().is_none());
    assert!(!state.cache.is_cleaning());
}

#[test]
fn test_kill_survives_interleaved_ticks() {
    let mut state = state();
    let victim = state.processes.processes()[5].pid;
    let before = state.processes.processes().len();

    assert!(state.processes.begin_kill(victim));
    for _ in 0..5 {
        state.apply(TelemetryEvent::ProcessTick);
        state.apply(TelemetryEvent::MetricsTick);
    }
    assert!(state.processes.get(victim).is_some(), "not removed before completion");

    state.apply(TelemetryEvent::ProcessKilled(victim));
    assert_eq!(state.processes.processes().len(), before - 1);
    assert!(state.processes.get(victim).is_none());

    // A late duplicate completion is harmless
    state.apply(TelemetryEvent::ProcessKilled(victim));
    assert_eq!(state.processes.processes().len(), before - 1);
}

#[test]
fn test_startup_rules_add_and_remove() {
    let mut state = state();
    let id = state
        .startup
        .add_rule(" Steam ", "Discord", "abc")
        .map(|rule| {
            assert_eq!(rule.trigger_app, "Steam");
            assert_eq!(rule.delay_seconds, 0);
            rule.id.clone()
        })
        .unwrap();

    assert!(state.startup.add_rule("", "Discord", "5").is_none());
    assert!(state.startup.remove_rule(&id));
    assert!(!state.startup.remove_rule(&id));
}
