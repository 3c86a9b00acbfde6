use cybersys::core::telemetry::{
    catalog, MetricsHistory, TelemetryGenerator, CPU_RANGE, DISK_RANGE, NETWORK_RANGE, RAM_RANGE,
    TEMPERATURE_RANGE,
};

#[test]
fn test_samples_stay_in_their_domains() {
    let mut generator = TelemetryGenerator::new();
    for _ in 0..500 {
        let sample = generator.sample_metrics();
        assert!(CPU_RANGE.contains(&sample.cpu_percent));
        assert!(RAM_RANGE.contains(&sample.ram_percent));
        assert!(DISK_RANGE.contains(&sample.disk_percent));
        assert!(NETWORK_RANGE.contains(&sample.network_kbps));
        assert!(TEMPERATURE_RANGE.contains(&sample.temperature_celsius));
    }
}

#[test]
fn test_process_drift_never_goes_negative() {
    let mut generator = TelemetryGenerator::seeded(42);
    let mut processes = generator.initial_processes();
    let pids: Vec<u32> = processes.iter().map(|p| p.pid).collect();

    for _ in 0..200 {
        generator.perturb_processes(&mut processes);
        for process in &processes {
            assert!(process.cpu_percent >= 0.0);
            assert!(process.memory_mb >= 0.0);
        }
    }

    // Drift touches values only, never identity or order
    let after: Vec<u32> = processes.iter().map(|p| p.pid).collect();
    assert_eq!(pids, after);
}

#[test]
fn test_history_keeps_most_recent_window() {
    let mut generator = TelemetryGenerator::seeded(1);
    let mut history = MetricsHistory::with_capacity(10);
    let mut last = None;
    for _ in 0..25 {
        let sample = generator.sample_metrics();
        history.push(sample);
        last = Some(sample);
    }

    assert_eq!(history.len(), 10);
    assert_eq!(history.latest().copied(), last);
    assert_eq!(history.cpu_as_u64().len(), 10);
    assert!(history.cpu_as_u64().iter().all(|v| *v <= 1000));
}

#[test]
fn test_catalog_ids_are_unique() {
    let mut ids: Vec<String> = catalog::cache_items().into_iter().map(|c| c.id).collect();
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);

    let apps = catalog::startup_apps();
    assert!(apps.iter().any(|a| a.enabled));
}
