use chrono::Local;

use cybersys::commands::snapshot::{take_snapshot, write_snapshot};
use cybersys::core::config::DashboardConfig;
use cybersys::core::scheduler::TelemetryEvent;
use cybersys::core::store::DashboardState;
use cybersys::core::telemetry::TelemetryGenerator;

#[test]
fn test_consecutive_snapshots_as_json_lines() {
    let mut state =
        DashboardState::with_generator(DashboardConfig::default(), TelemetryGenerator::seeded(30));
    let mut out = Vec::new();

    for sequence in 1..=3 {
        if sequence > 1 {
            state.apply(TelemetryEvent::MetricsTick);
        }
        let snapshot = take_snapshot(&state, sequence, Local::now());
        write_snapshot(&mut out, &snapshot, true).unwrap();
    }

    let text = String::from_utf8(out).unwrap();
    let sequences: Vec<u64> = text
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["sequence"].as_u64().unwrap()
        })
        .collect();
    assert_eq!(sequences, vec![1, 2, 3]);
}
