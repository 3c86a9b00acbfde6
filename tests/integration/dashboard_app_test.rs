use cybersys::core::config::DashboardConfig;
use cybersys::core::scheduler::{ActionRequest, TelemetryEvent};
use cybersys::core::store::DashboardState;
use cybersys::core::telemetry::TelemetryGenerator;
use cybersys::ui::dashboard_tui::{DashboardApp, DashboardEvent, KeyMode, Overlay, SystemModule};

fn app_on(module: SystemModule) -> DashboardApp {
    let mut app = DashboardApp::new(DashboardState::with_generator(
        DashboardConfig::default(),
        TelemetryGenerator::seeded(100),
    ));
    while app.active_module != module {
        app.handle_event(DashboardEvent::NextModule);
    }
    app
}

#[test]
fn test_kill_flow_through_scheduler_events() {
    let mut app = app_on(SystemModule::Tasks);
    let pid = app.selected_pid().unwrap();

    let action = app.handle_event(DashboardEvent::KillSelected);
    assert_eq!(action, Some(ActionRequest::KillProcess(pid)));

    // Pressing again while pending does nothing
    assert_eq!(app.handle_event(DashboardEvent::KillSelected), None);

    app.on_telemetry(TelemetryEvent::ProcessTick);
    assert!(app.state.processes.get(pid).is_some());

    app.on_telemetry(TelemetryEvent::ProcessKilled(pid));
    assert!(app.state.processes.get(pid).is_none());
    assert_eq!(app.visible_processes().len(), 15);
}

#[test]
fn test_cursor_follows_shrinking_table() {
    let mut app = app_on(SystemModule::Tasks);
    for _ in 0..30 {
        app.handle_event(DashboardEvent::Down);
    }
    assert_eq!(app.task_cursor, 15);

    let last = app.selected_pid().unwrap();
    app.handle_event(DashboardEvent::KillSelected);
    app.on_telemetry(TelemetryEvent::ProcessKilled(last));
    assert_eq!(app.task_cursor, 14);
    assert!(app.selected_pid().is_some());
}

#[test]
fn test_cursor_stays_on_pid_when_rows_reorder() {
    let mut app = app_on(SystemModule::Tasks);
    for _ in 0..5 {
        app.handle_event(DashboardEvent::Down);
    }
    let pid = app.selected_pid().unwrap();

    for _ in 0..20 {
        app.on_telemetry(TelemetryEvent::ProcessTick);
        assert_eq!(app.selected_pid(), Some(pid));
    }
    assert_eq!(
        app.handle_event(DashboardEvent::KillSelected),
        Some(ActionRequest::KillProcess(pid))
    );
}

#[test]
fn test_undelivered_kill_can_be_retried() {
    let mut app = app_on(SystemModule::Tasks);
    let pid = app.selected_pid().unwrap();

    let action = app.handle_event(DashboardEvent::KillSelected).unwrap();
    app.state.abort_action(&action);

    assert!(!app.state.processes.is_killing(pid));
    assert_eq!(
        app.handle_event(DashboardEvent::KillSelected),
        Some(ActionRequest::KillProcess(pid))
    );
}

#[test]
fn test_undelivered_clean_can_be_retried() {
    let mut app = app_on(SystemModule::Cleaner);
    app.handle_event(DashboardEvent::ToggleAll);
    app.handle_event(DashboardEvent::PreviewClean);
    let action = app.handle_event(DashboardEvent::Confirm).unwrap();
    assert!(app.state.cache.is_cleaning());

    app.state.abort_action(&action);
    assert!(!app.state.cache.is_cleaning());
    assert_eq!(app.state.cache.selection.len(), 6);

    // Selection responds again and a new cleanup can start
    app.handle_event(DashboardEvent::ToggleAll);
    assert!(app.state.cache.selection.is_empty());
    app.handle_event(DashboardEvent::ToggleAll);
    app.handle_event(DashboardEvent::PreviewClean);
    assert!(matches!(
        app.handle_event(DashboardEvent::Confirm),
        Some(ActionRequest::CleanCache(_))
    ));
}

#[test]
fn test_sort_shortcuts_toggle_direction() {
    let mut app = app_on(SystemModule::Tasks);
    app.handle_event(DashboardEvent::Digit(2));
    let desc: Vec<u32> = app.visible_processes().iter().map(|p| p.pid).collect();
    app.handle_event(DashboardEvent::Digit(2));
    let asc: Vec<u32> = app.visible_processes().iter().map(|p| p.pid).collect();

    assert!(desc.windows(2).all(|w| w[0] > w[1]));
    assert!(asc.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_preview_then_clean() {
    let mut app = app_on(SystemModule::Cleaner);
    // Preview needs a selection
    app.handle_event(DashboardEvent::PreviewClean);
    assert_eq!(app.overlay, Overlay::None);

    app.handle_event(DashboardEvent::ToggleAll);
    app.handle_event(DashboardEvent::PreviewClean);
    assert_eq!(app.overlay, Overlay::CleanPreview);
    assert_eq!(app.key_mode(), KeyMode::Modal);

    let ids = match app.handle_event(DashboardEvent::Confirm) {
        Some(ActionRequest::CleanCache(ids)) => ids,
        other => panic!("expected a clean request, got {:?}", other),
    };
    assert_eq!(ids.len(), 6);
    assert!(app.state.cache.is_cleaning());

    // Selection is frozen while cleaning
    app.handle_event(DashboardEvent::ToggleAll);
    assert_eq!(app.state.cache.selection.len(), 6);

    app.on_telemetry(TelemetryEvent::CacheCleaned(ids));
    assert!(app.state.cache.items().is_empty());
    assert_eq!(app.cache_cursor, 0);
}

#[test]
fn test_startup_toggle_and_delete_rule() {
    let mut app = app_on(SystemModule::Startup);
    let was_enabled = app.state.startup.apps()[0].enabled;
    app.handle_event(DashboardEvent::ToggleSelected);
    assert_eq!(app.state.startup.apps()[0].enabled, !was_enabled);

    // Cursor past the apps lands on the rules
    let app_count = app.state.startup.apps().len();
    for _ in 0..app_count {
        app.handle_event(DashboardEvent::Down);
    }
    app.handle_event(DashboardEvent::DeleteSelected);
    assert!(app.state.startup.rules().is_empty());
}

#[test]
fn test_paused_dashboard_ignores_metric_ticks() {
    let mut app = app_on(SystemModule::Monitor);
    app.handle_event(DashboardEvent::OpenSettings);
    for _ in 0..3 {
        app.handle_event(DashboardEvent::Down);
    }
    // Auto refresh is the fourth setting
    app.handle_event(DashboardEvent::ToggleSelected);
    app.handle_event(DashboardEvent::Confirm);
    assert!(!app.state.settings.auto_refresh);

    app.on_telemetry(TelemetryEvent::MetricsTick);
    assert!(app.state.metrics.history().is_empty());
}

#[test]
fn test_quit_from_any_mode() {
    let mut app = app_on(SystemModule::Events);
    app.handle_event(DashboardEvent::StartSearch);
    assert_eq!(app.key_mode(), KeyMode::TextInput);
    app.handle_event(DashboardEvent::Quit);
    assert!(app.should_quit);
}
