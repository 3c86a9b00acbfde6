use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::config::{DashboardConfig, Settings, SettingsField};
use crate::core::derived::{filter_events, process_view, LogFilter, ProcessSort, SortField};
use crate::core::scheduler::{ActionRequest, TelemetryEvent, TelemetryScheduler};
use crate::core::store::DashboardState;
use crate::core::telemetry::{EventLogEntry, EventType, ProcessRecord};

use super::event_handler::{map_key, DashboardEvent, KeyMode};
use super::render::render_ui;

/// Redraw cadence; telemetry arrives on its own schedule
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopTab {
    System,
    Game,
    Electronic,
    Tools,
}

impl TopTab {
    pub const ALL: [TopTab; 4] = [TopTab::System, TopTab::Game, TopTab::Electronic, TopTab::Tools];

    pub fn label(&self) -> &'static str {
        match self {
            TopTab::System => "System",
            TopTab::Game => "Game",
            TopTab::Electronic => "Electronic",
            TopTab::Tools => "More Tools",
        }
    }

    /// Title and blurb of tabs that have no content yet
    pub fn placeholder(&self) -> Option<(&'static str, &'static str)> {
        match self {
            TopTab::System => None,
            TopTab::Game => Some(("Game Optimizer", "Game performance tools coming soon...")),
            TopTab::Electronic => Some(("Electronic Hub", "Hardware management coming soon...")),
            TopTab::Tools => Some(("More Tools", "Additional utilities coming soon...")),
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemModule {
    Info,
    Tasks,
    Startup,
    Monitor,
    Status,
    Cleaner,
    Events,
    Security,
}

impl SystemModule {
    pub const ALL: [SystemModule; 8] = [
        SystemModule::Info,
        SystemModule::Tasks,
        SystemModule::Startup,
        SystemModule::Monitor,
        SystemModule::Status,
        SystemModule::Cleaner,
        SystemModule::Events,
        SystemModule::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SystemModule::Info => "System Info",
            SystemModule::Tasks => "Tasks",
            SystemModule::Startup => "Startup",
            SystemModule::Monitor => "Monitor",
            SystemModule::Status => "Status",
            SystemModule::Cleaner => "Cleaner",
            SystemModule::Events => "Events",
            SystemModule::Security => "Security",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Settings { draft: Settings, cursor: usize },
    CleanPreview,
}

/// Which text field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    TaskSearch,
    LogSearch,
    RuleForm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleField {
    #[default]
    Trigger,
    Launch,
    Delay,
}

impl RuleField {
    fn next(self) -> Self {
        match self {
            RuleField::Trigger => RuleField::Launch,
            RuleField::Launch => RuleField::Delay,
            RuleField::Delay => RuleField::Trigger,
        }
    }
}

/// Draft of a new startup rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleForm {
    pub trigger_app: String,
    pub launch_app: String,
    pub delay: String,
    pub field: RuleField,
}

impl RuleForm {
    fn active_mut(&mut self) -> &mut String {
        match self.field {
            RuleField::Trigger => &mut self.trigger_app,
            RuleField::Launch => &mut self.launch_app,
            RuleField::Delay => &mut self.delay,
        }
    }
}

/// Dashboard application state: the data stores plus everything the views need to remember
pub struct DashboardApp {
    pub state: DashboardState,
    pub should_quit: bool,
    pub show_help: bool,
    pub active_tab: TopTab,
    pub active_module: SystemModule,
    pub overlay: Overlay,
    pub editing: Option<EditTarget>,
    pub task_search: String,
    pub process_sort: ProcessSort,
    pub task_cursor: usize,
    pub startup_cursor: usize,
    pub rule_form: Option<RuleForm>,
    pub cache_cursor: usize,
    pub log_filter: LogFilter,
    pub log_search: String,
    pub log_cursor: usize,
}

impl DashboardApp {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            should_quit: false,
            show_help: false,
            active_tab: TopTab::System,
            active_module: SystemModule::Info,
            overlay: Overlay::None,
            editing: None,
            task_search: String::new(),
            process_sort: ProcessSort::default(),
            task_cursor: 0,
            startup_cursor: 0,
            rule_form: None,
            cache_cursor: 0,
            log_filter: LogFilter::All,
            log_search: String::new(),
            log_cursor: 0,
        }
    }

    pub fn key_mode(&self) -> KeyMode {
        if self.editing.is_some() {
            KeyMode::TextInput
        } else if self.show_help || self.overlay != Overlay::None {
            KeyMode::Modal
        } else {
            KeyMode::Normal
        }
    }

    /// Task table rows as currently filtered and sorted
    pub fn visible_processes(&self) -> Vec<&ProcessRecord> {
        process_view(
            self.state.processes.processes(),
            &self.task_search,
            self.process_sort,
        )
    }

    pub fn visible_events(&self) -> Vec<&EventLogEntry> {
        filter_events(self.state.event_logs(), self.log_filter, &self.log_search)
    }

    pub fn selected_pid(&self) -> Option<u32> {
        self.visible_processes().get(self.task_cursor).map(|p| p.pid)
    }

    /// Apply a scheduler event. The task cursor stays on the same pid when rows reorder.
    pub fn on_telemetry(&mut self, event: TelemetryEvent) {
        let followed = self.selected_pid();
        self.state.apply(event);

        if let Some(pid) = followed {
            if let Some(row) = self.visible_processes().iter().position(|p| p.pid == pid) {
                self.task_cursor = row;
            }
        }
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let tasks = self.visible_processes().len();
        let startup = self.state.startup.apps().len() + self.state.startup.rules().len();
        let cache = self.state.cache.items().len();
        let logs = self.visible_events().len();

        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
        self.startup_cursor = self.startup_cursor.min(startup.saturating_sub(1));
        self.cache_cursor = self.cache_cursor.min(cache.saturating_sub(1));
        self.log_cursor = self.log_cursor.min(logs.saturating_sub(1));
    }

    /// Handle keyboard events; returns a simulated action for the scheduler, if any
    pub fn handle_event(&mut self, event: DashboardEvent) -> Option<ActionRequest> {
        if event == DashboardEvent::Quit {
            self.should_quit = true;
            return None;
        }

        if self.show_help {
            if event != DashboardEvent::None {
                self.show_help = false;
            }
            return None;
        }

        let action = if let Some(target) = self.editing {
            self.handle_text_input(target, event);
            None
        } else {
            match self.overlay {
                Overlay::Settings { .. } => {
                    self.handle_settings(event);
                    None
                }
                Overlay::CleanPreview => self.handle_preview(event),
                Overlay::None => self.handle_normal(event),
            }
        };

        self.clamp_cursors();
        action
    }

    fn handle_text_input(&mut self, target: EditTarget, event: DashboardEvent) {
        match target {
            EditTarget::TaskSearch | EditTarget::LogSearch => {
                let buffer = if target == EditTarget::TaskSearch {
                    &mut self.task_search
                } else {
                    &mut self.log_search
                };
                match event {
                    DashboardEvent::InputChar(c) => buffer.push(c),
                    DashboardEvent::InputBackspace => {
                        buffer.pop();
                    }
                    DashboardEvent::Confirm => self.editing = None,
                    DashboardEvent::Cancel => {
                        buffer.clear();
                        self.editing = None;
                    }
                    _ => {}
                }
                if target == EditTarget::TaskSearch {
                    self.task_cursor = 0;
                } else {
                    self.log_cursor = 0;
                }
            }
            EditTarget::RuleForm => {
                let Some(form) = self.rule_form.as_mut() else {
                    self.editing = None;
                    return;
                };
                match event {
                    DashboardEvent::InputChar(c) => form.active_mut().push(c),
                    DashboardEvent::InputBackspace => {
                        form.active_mut().pop();
                    }
                    DashboardEvent::NextField => form.field = form.field.next(),
                    DashboardEvent::Confirm => {
                        let added = self
                            .state
                            .startup
                            .add_rule(&form.trigger_app, &form.launch_app, &form.delay)
                            .is_some();
                        if added {
                            self.rule_form = None;
                            self.editing = None;
                        }
                    }
                    DashboardEvent::Cancel => {
                        self.rule_form = None;
                        self.editing = None;
                    }
                    _ => {}
                }
            }
        }
    }

    fn handle_settings(&mut self, event: DashboardEvent) {
        let Overlay::Settings { mut draft, mut cursor } = self.overlay else {
            return;
        };
        let field_count = SettingsField::ALL.len();

        match event {
            DashboardEvent::Up => cursor = cursor.saturating_sub(1),
            DashboardEvent::Down => cursor = (cursor + 1).min(field_count - 1),
            DashboardEvent::ToggleSelected => draft.toggle(SettingsField::ALL[cursor]),
            DashboardEvent::Confirm => {
                self.state.settings = draft;
                self.overlay = Overlay::None;
                log::debug!("Settings saved: {:?}", draft);
                return;
            }
            DashboardEvent::Cancel => {
                self.overlay = Overlay::None;
                return;
            }
            _ => {}
        }

        self.overlay = Overlay::Settings { draft, cursor };
    }

    fn handle_preview(&mut self, event: DashboardEvent) -> Option<ActionRequest> {
        match event {
            DashboardEvent::Confirm => {
                self.overlay = Overlay::None;
                self.start_clean()
            }
            DashboardEvent::Cancel => {
                self.overlay = Overlay::None;
                None
            }
            _ => None,
        }
    }

    fn handle_normal(&mut self, event: DashboardEvent) -> Option<ActionRequest> {
        match event {
            DashboardEvent::ToggleHelp => {
                self.show_help = true;
                return None;
            }
            DashboardEvent::NextTab => {
                self.active_tab = self.active_tab.next();
                return None;
            }
            DashboardEvent::PrevTab => {
                self.active_tab = self.active_tab.prev();
                return None;
            }
            DashboardEvent::OpenSettings => {
                self.overlay = Overlay::Settings {
                    draft: self.state.settings,
                    cursor: 0,
                };
                return None;
            }
            _ => {}
        }

        if self.active_tab != TopTab::System {
            return None;
        }

        match event {
            DashboardEvent::NextModule => {
                self.active_module = self.active_module.next();
                None
            }
            DashboardEvent::PrevModule => {
                self.active_module = self.active_module.prev();
                None
            }
            _ => match self.active_module {
                SystemModule::Tasks => self.handle_tasks(event),
                SystemModule::Startup => {
                    self.handle_startup(event);
                    None
                }
                SystemModule::Cleaner => self.handle_cleaner(event),
                SystemModule::Events => {
                    self.handle_events(event);
                    None
                }
                _ => None,
            },
        }
    }

    fn handle_tasks(&mut self, event: DashboardEvent) -> Option<ActionRequest> {
        match event {
            DashboardEvent::Up => self.task_cursor = self.task_cursor.saturating_sub(1),
            DashboardEvent::Down => self.task_cursor += 1,
            DashboardEvent::StartSearch => self.editing = Some(EditTarget::TaskSearch),
            DashboardEvent::Digit(d) => {
                let field = match d {
                    1 => SortField::Name,
                    2 => SortField::Pid,
                    3 => SortField::Cpu,
                    4 => SortField::Memory,
                    _ => return None,
                };
                self.process_sort = self.process_sort.select(field);
            }
            DashboardEvent::KillSelected => {
                let pid = self.selected_pid()?;
                if self.state.processes.begin_kill(pid) {
                    return Some(ActionRequest::KillProcess(pid));
                }
            }
            _ => {}
        }
        None
    }

    fn handle_startup(&mut self, event: DashboardEvent) {
        let app_count = self.state.startup.apps().len();
        match event {
            DashboardEvent::Up => self.startup_cursor = self.startup_cursor.saturating_sub(1),
            DashboardEvent::Down => self.startup_cursor += 1,
            DashboardEvent::ToggleSelected => {
                if let Some(app) = self.state.startup.apps().get(self.startup_cursor) {
                    let id = app.id.clone();
                    self.state.startup.toggle_app(&id);
                }
            }
            DashboardEvent::DeleteSelected => {
                let rule_index = self.startup_cursor.checked_sub(app_count);
                if let Some(rule) = rule_index.and_then(|i| self.state.startup.rules().get(i)) {
                    let id = rule.id.clone();
                    self.state.startup.remove_rule(&id);
                }
            }
            DashboardEvent::NewRule => {
                self.rule_form = Some(RuleForm::default());
                self.editing = Some(EditTarget::RuleForm);
            }
            _ => {}
        }
    }

    fn handle_cleaner(&mut self, event: DashboardEvent) -> Option<ActionRequest> {
        match event {
            DashboardEvent::Up => self.cache_cursor = self.cache_cursor.saturating_sub(1),
            DashboardEvent::Down => self.cache_cursor += 1,
            DashboardEvent::ToggleSelected => {
                if let Some(item) = self.state.cache.items().get(self.cache_cursor) {
                    let id = item.id.clone();
                    self.state.cache.toggle(&id);
                }
            }
            DashboardEvent::ToggleAll => self.state.cache.toggle_all(),
            DashboardEvent::PreviewClean => {
                if !self.state.cache.selection.is_empty() && !self.state.cache.is_cleaning() {
                    self.overlay = Overlay::CleanPreview;
                }
            }
            DashboardEvent::Clean => return self.start_clean(),
            _ => {}
        }
        None
    }

    fn start_clean(&mut self) -> Option<ActionRequest> {
        self.state
            .cache
            .begin_clean()
            .map(ActionRequest::CleanCache)
    }

    fn handle_events(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Up => self.log_cursor = self.log_cursor.saturating_sub(1),
            DashboardEvent::Down => self.log_cursor += 1,
            DashboardEvent::StartSearch => self.editing = Some(EditTarget::LogSearch),
            DashboardEvent::CycleFilter => self.log_filter = self.log_filter.next(),
            DashboardEvent::Digit(0) => self.log_filter = LogFilter::All,
            DashboardEvent::Digit(d) => {
                if let Some(event_type) = EventType::ALL.get(d as usize - 1) {
                    self.log_filter = LogFilter::Only(*event_type);
                }
            }
            _ => return,
        }
        if !matches!(event, DashboardEvent::Up | DashboardEvent::Down) {
            self.log_cursor = 0;
        }
    }
}

/// Run the dashboard TUI application
pub fn run_dashboard_app(config: DashboardConfig) -> Result<()> {
    config.validate().context("Invalid dashboard configuration")?;

    let mut scheduler =
        TelemetryScheduler::start(&config).context("Failed to start telemetry scheduler")?;
    let mut app = DashboardApp::new(DashboardState::new(config));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_loop(&mut terminal, &mut app, &mut scheduler);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    scheduler.shutdown();
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
    scheduler: &mut TelemetryScheduler,
) -> Result<()> {
    loop {
        for event in scheduler.drain() {
            app.on_telemetry(event);
        }

        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(FRAME_INTERVAL).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let dashboard_event = map_key(key, app.key_mode());
                    if let Some(action) = app.handle_event(dashboard_event) {
                        if let Err(e) = scheduler.request(action.clone()) {
                            log::error!("{}", e);
                            app.state.abort_action(&action);
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
