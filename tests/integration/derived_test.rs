use cybersys::core::derived::{
    evaluate_health, filter_events, filter_processes, process_view, summarize_security,
    HealthConfig, HealthStatus, IndicatorKind, LogFilter, ProcessSort, SortDirection, SortField,
};
use cybersys::core::telemetry::{catalog, EventType, MetricSample, TelemetryGenerator};
use cybersys::core::config::DashboardConfig;
use cybersys::core::store::DashboardState;
use chrono::Local;

#[test]
fn test_filter_is_idempotent() {
    let processes = TelemetryGenerator::seeded(8).initial_processes();
    for term in ["", "o", "SERVICE", "nothing-matches"] {
        let once: Vec<_> = filter_processes(&processes, term)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<_> = filter_processes(&once, term).into_iter().cloned().collect();
        assert_eq!(once, twice, "term {:?}", term);
    }
}

#[test]
fn test_descending_is_reverse_of_ascending() {
    let processes = TelemetryGenerator::seeded(21).initial_processes();
    for field in [SortField::Pid, SortField::Cpu, SortField::Memory] {
        let asc = process_view(
            &processes,
            "",
            ProcessSort {
                field,
                direction: SortDirection::Ascending,
            },
        );
        let mut desc = process_view(
            &processes,
            "",
            ProcessSort {
                field,
                direction: SortDirection::Descending,
            },
        );
        desc.reverse();
        let asc_pids: Vec<u32> = asc.iter().map(|p| p.pid).collect();
        let desc_pids: Vec<u32> = desc.iter().map(|p| p.pid).collect();
        assert_eq!(asc_pids, desc_pids, "{:?}", field);
    }
}

#[test]
fn test_view_never_adds_rows() {
    let processes = TelemetryGenerator::seeded(4).initial_processes();
    let view = process_view(&processes, "e", ProcessSort::default());
    assert!(view.len() <= processes.len());
    assert!(view.iter().all(|p| p.name.to_lowercase().contains('e')));
}

#[test]
fn test_event_type_filter_and_search_combine() {
    let logs = catalog::event_logs(Local::now());
    let all = filter_events(&logs, LogFilter::All, "");
    assert_eq!(all.len(), logs.len());

    for event_type in EventType::ALL {
        let subset = filter_events(&logs, LogFilter::Only(event_type), "");
        assert!(subset.iter().all(|e| e.event_type == event_type));
    }

    let nothing = filter_events(&logs, LogFilter::All, "no such text anywhere");
    assert!(nothing.is_empty());
}

#[test]
fn test_health_worst_indicator_wins() {
    let config = HealthConfig::default();

    let calm = MetricSample {
        cpu_percent: 10.0,
        ram_percent: 50.0,
        disk_percent: 30.0,
        network_kbps: 100.0,
        temperature_celsius: 45.0,
    };
    assert_eq!(evaluate_health(&calm, &config).overall, HealthStatus::Good);

    let hot = MetricSample {
        temperature_celsius: 86.0,
        ..calm
    };
    let report = evaluate_health(&hot, &config);
    assert_eq!(report.overall, HealthStatus::Critical);
    assert_eq!(report.overall.score(), 50);

    // Exactly on the threshold stays on the lower tier
    let edge = MetricSample {
        cpu_percent: 70.0,
        ..calm
    };
    assert_eq!(evaluate_health(&edge, &config).overall, HealthStatus::Good);
}

#[test]
fn test_security_counts_are_consistent() {
    let processes = TelemetryGenerator::seeded(13).initial_processes();
    let summary = summarize_security(&processes);
    assert_eq!(summary.total, processes.len());
    assert!(summary.suspicious_count <= summary.admin_count);
    assert!(summary.suspicious_count <= summary.unsigned_count);
    assert!((0.0..=100.0).contains(&summary.trust_percent()));
}

#[test]
fn test_suspicious_processes_leave_health_alone() {
    let state = (0..200)
        .map(|seed| {
            DashboardState::with_generator(DashboardConfig::default(), TelemetryGenerator::seeded(seed))
        })
        .find(|state| state.security().suspicious_count > 0)
        .expect("some seed yields a suspicious process");

    let report = state.health();
    let security = report
        .indicators
        .iter()
        .find(|i| i.kind == IndicatorKind::Security)
        .unwrap();
    assert_eq!(security.status, HealthStatus::Good);
    assert_eq!(security.value, 100.0);
}
