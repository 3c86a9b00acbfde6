use std::time::{Duration, Instant};

use cybersys::core::config::DashboardConfig;
use cybersys::core::scheduler::{ActionRequest, TelemetryEvent, TelemetryScheduler};

fn fast_config() -> DashboardConfig {
    DashboardConfig {
        metrics_interval_ms: 20,
        process_interval_ms: 30,
        clock_interval_ms: 25,
        kill_delay_ms: 40,
        clean_delay_ms: 60,
        ..Default::default()
    }
}

/// Collect events until `done` matches or the deadline passes
fn wait_for<F>(scheduler: &mut TelemetryScheduler, deadline: Duration, done: F) -> Vec<TelemetryEvent>
where
    F: Fn(&TelemetryEvent) -> bool,
{
    let start = Instant::now();
    let mut seen = Vec::new();
    while start.elapsed() < deadline {
        if let Some(event) = scheduler.next_event_timeout(Duration::from_millis(50)) {
            let finished = done(&event);
            seen.push(event);
            if finished {
                break;
            }
        }
    }
    seen
}

#[test]
fn test_all_tickers_fire() {
    let mut scheduler = TelemetryScheduler::start(&fast_config()).unwrap();
    let events = wait_for(&mut scheduler, Duration::from_secs(2), |_| false);
    scheduler.shutdown();

    assert!(events.contains(&TelemetryEvent::MetricsTick));
    assert!(events.contains(&TelemetryEvent::ProcessTick));
    assert!(events
        .iter()
        .any(|e| matches!(e, TelemetryEvent::ClockTick(_))));
}

#[test]
fn test_kill_completes_after_delay() {
    let mut scheduler = TelemetryScheduler::start(&fast_config()).unwrap();
    let requested = Instant::now();
    scheduler.request(ActionRequest::KillProcess(1246)).unwrap();

    let events = wait_for(&mut scheduler, Duration::from_secs(3), |e| {
        *e == TelemetryEvent::ProcessKilled(1246)
    });
    let elapsed = requested.elapsed();
    scheduler.shutdown();

    assert_eq!(events.last(), Some(&TelemetryEvent::ProcessKilled(1246)));
    assert!(elapsed >= Duration::from_millis(40));
}

#[test]
fn test_clean_completion_carries_ids() {
    let mut scheduler = TelemetryScheduler::start(&fast_config()).unwrap();
    let ids = vec!["1".to_string(), "3".to_string()];
    scheduler
        .request(ActionRequest::CleanCache(ids.clone()))
        .unwrap();

    let events = wait_for(&mut scheduler, Duration::from_secs(3), |e| {
        matches!(e, TelemetryEvent::CacheCleaned(_))
    });
    scheduler.shutdown();

    assert_eq!(events.last(), Some(&TelemetryEvent::CacheCleaned(ids)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = DashboardConfig {
        metrics_interval_ms: 0,
        ..Default::default()
    };
    assert!(TelemetryScheduler::start(&config).is_err());
}
