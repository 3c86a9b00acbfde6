use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events that can occur in the dashboard TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Next / previous top-level tab
    NextTab,
    PrevTab,
    /// Next / previous system module
    NextModule,
    PrevModule,
    /// Move the cursor of the active list
    Up,
    Down,
    /// Tick the row under the cursor (startup entry, cache item, setting)
    ToggleSelected,
    /// Select-all toggle of the cleaner
    ToggleAll,
    /// Enter: submit a form, confirm a modal
    Confirm,
    /// Esc: leave input mode or close a modal
    Cancel,
    /// Focus the search box of the active module
    StartSearch,
    /// Digit shortcut: sort column on Tasks, type filter on Events
    Digit(u8),
    CycleFilter,
    KillSelected,
    NewRule,
    DeleteSelected,
    PreviewClean,
    Clean,
    OpenSettings,
    /// Text input
    InputChar(char),
    InputBackspace,
    NextField,
    /// No action
    None,
}

/// How key presses are interpreted right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Normal,
    /// A text field has focus
    TextInput,
    /// A modal (help, settings, cleanup preview) is open
    Modal,
}

pub fn map_key(key: KeyEvent, mode: KeyMode) -> DashboardEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return DashboardEvent::Quit;
    }

    match mode {
        KeyMode::TextInput => match key.code {
            KeyCode::Enter => DashboardEvent::Confirm,
            KeyCode::Esc => DashboardEvent::Cancel,
            KeyCode::Tab => DashboardEvent::NextField,
            KeyCode::Backspace => DashboardEvent::InputBackspace,
            KeyCode::Char(c) => DashboardEvent::InputChar(c),
            _ => DashboardEvent::None,
        },
        KeyMode::Modal => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => DashboardEvent::Cancel,
            KeyCode::Enter => DashboardEvent::Confirm,
            KeyCode::Char(' ') => DashboardEvent::ToggleSelected,
            KeyCode::Up | KeyCode::Char('k') => DashboardEvent::Up,
            KeyCode::Down | KeyCode::Char('j') => DashboardEvent::Down,
            KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
            _ => DashboardEvent::None,
        },
        KeyMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
            KeyCode::Tab => DashboardEvent::NextModule,
            KeyCode::BackTab => DashboardEvent::PrevModule,
            KeyCode::Char(']') => DashboardEvent::NextTab,
            KeyCode::Char('[') => DashboardEvent::PrevTab,
            KeyCode::Up | KeyCode::Char('k') => DashboardEvent::Up,
            KeyCode::Down | KeyCode::Char('j') => DashboardEvent::Down,
            KeyCode::Char(' ') => DashboardEvent::ToggleSelected,
            KeyCode::Enter => DashboardEvent::Confirm,
            KeyCode::Char('/') => DashboardEvent::StartSearch,
            KeyCode::Char(c @ '0'..='4') => DashboardEvent::Digit(c as u8 - b'0'),
            KeyCode::Char('f') => DashboardEvent::CycleFilter,
            KeyCode::Char('x') => DashboardEvent::KillSelected,
            KeyCode::Char('n') => DashboardEvent::NewRule,
            KeyCode::Char('d') | KeyCode::Delete => DashboardEvent::DeleteSelected,
            KeyCode::Char('a') => DashboardEvent::ToggleAll,
            KeyCode::Char('p') => DashboardEvent::PreviewClean,
            KeyCode::Char('c') => DashboardEvent::Clean,
            KeyCode::Char('s') | KeyCode::Char(',') => DashboardEvent::OpenSettings,
            _ => DashboardEvent::None,
        },
    }
}
