use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap},
};

use super::app::{DashboardApp, EditTarget, Overlay, RuleField, RuleForm, SystemModule, TopTab};
use super::widgets::{
    accent, checkbox, colored_gauge, cpu_bar, event_color, health_color, impact_color, load_color,
    row_style, scroll_offset, security_color, temp_color,
};
use crate::core::config::SettingsField;
use crate::core::derived::{
    admin_processes, count_events, suspicious_processes, SecurityLevel, SortField,
};
use crate::core::telemetry::{EventType, ProcessRecord, NETWORK_DOMAIN_MAX_KBPS};
use crate::ui::formatters::{format_bytes, format_megabytes, format_time_ago, format_uptime};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with top tabs and clock
            Constraint::Length(3), // Module bar
            Constraint::Min(5),    // Active view
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.active_tab.placeholder() {
        Some((title, blurb)) => {
            render_placeholder(frame, chunks[1].union(chunks[2]), app, title, blurb);
        }
        None => {
            render_module_bar(frame, chunks[1], app);
            render_module(frame, chunks[2], app);
        }
    }

    render_footer(frame, chunks[3], app);

    match app.overlay {
        Overlay::Settings { draft, cursor } => render_settings_modal(frame, area, app, &draft, cursor),
        Overlay::CleanPreview => render_clean_preview(frame, area, app),
        Overlay::None => {}
    }

    if let (Some(EditTarget::RuleForm), Some(form)) = (app.editing, app.rule_form.as_ref()) {
        render_rule_form(frame, area, app, form);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn themed_block(app: &DashboardApp, title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(app.state.settings.theme)))
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let clock = app.state.info.clock();
    let refresh = if app.state.settings.auto_refresh {
        Span::styled("LIVE", Style::default().fg(Color::Green))
    } else {
        Span::styled("PAUSED", Style::default().fg(Color::Yellow))
    };

    let name = format!(" CyberSys v{} ", env!("CARGO_PKG_VERSION"));
    let block = themed_block(app, name).title_top(
        Line::from(vec![
            Span::raw(" "),
            refresh,
            Span::raw(format!(
                " │ Refresh: {}ms │ {} │ {} ",
                app.state.config().metrics_interval_ms,
                clock.format("%a %d %b %Y"),
                clock.format("%H:%M:%S")
            )),
        ])
        .right_aligned(),
    );

    let titles: Vec<&str> = TopTab::ALL.iter().map(|t| t.label()).collect();
    let selected = TopTab::ALL
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .divider("│")
        .highlight_style(
            Style::default()
                .fg(accent(app.state.settings.theme))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    frame.render_widget(tabs, area);
}

fn render_module_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let titles: Vec<&str> = SystemModule::ALL.iter().map(|m| m.label()).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.active_module.index())
        .divider("│")
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, app: &DashboardApp, title: &str, blurb: &str) {
    let block = themed_block(app, format!(" {} ", title));
    let text = vec![
        Line::from(""),
        Line::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(blurb.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn render_module(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    match app.active_module {
        SystemModule::Info => render_info(frame, area, app),
        SystemModule::Tasks => render_tasks(frame, area, app),
        SystemModule::Startup => render_startup(frame, area, app),
        SystemModule::Monitor => render_monitor(frame, area, app),
        SystemModule::Status => render_status(frame, area, app),
        SystemModule::Cleaner => render_cleaner(frame, area, app),
        SystemModule::Events => render_events(frame, area, app),
        SystemModule::Security => render_security(frame, area, app),
    }
}

fn render_info(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let specs = &app.state.info.specs;
    let label = |name: &'static str| Span::styled(format!("{:<14}", name), Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(vec![label("Processor"), Span::raw(specs.cpu.clone())]),
        Line::from(vec![label("Graphics"), Span::raw(specs.gpu.clone())]),
        Line::from(vec![label("Memory"), Span::raw(specs.ram.clone())]),
        Line::from(vec![label("Motherboard"), Span::raw(specs.motherboard.clone())]),
        Line::from(vec![label("OS"), Span::raw(specs.os.clone())]),
        Line::from(vec![label("System uptime"), Span::raw(specs.uptime.clone())]),
        Line::from(vec![
            label("Power-on"),
            Span::raw(format!("{} hours", specs.power_on_hours)),
        ]),
    ];
    let para = Paragraph::new(lines)
        .block(themed_block(app, " Hardware "))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, chunks[0]);

    let session_block = themed_block(app, " Session ");
    let inner = session_block.inner(chunks[1]);
    frame.render_widget(session_block, chunks[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let clock = app.state.info.clock();
    frame.render_widget(
        Paragraph::new(format!("Time     {}", clock.format("%H:%M:%S"))),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(format!(
            "Uptime   {}",
            format_uptime(app.state.info.app_uptime_secs())
        )),
        rows[1],
    );

    let current = app.state.metrics.current();
    frame.render_widget(
        colored_gauge(current.cpu_percent, format!("CPU {:.1}%", current.cpu_percent)),
        rows[3],
    );
    frame.render_widget(
        colored_gauge(current.ram_percent, format!("RAM {:.1}%", current.ram_percent)),
        rows[4],
    );
}

fn render_tasks(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search_box(
        frame,
        chunks[0],
        app,
        &app.task_search,
        app.editing == Some(EditTarget::TaskSearch),
    );

    let visible = app.visible_processes();
    let block = themed_block(
        app,
        format!(
            " Processes ({}/{}) [/:search 1-4:sort x:kill] ",
            visible.len(),
            app.state.processes.processes().len()
        ),
    );
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    if visible.is_empty() {
        let msg = if app.task_search.is_empty() {
            "No processes running".to_string()
        } else {
            format!("No processes match '{}'", app.task_search)
        };
        frame.render_widget(
            Paragraph::new(msg).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let sort = app.process_sort;
    let heading = |field: SortField, text: &str| {
        let text = if sort.field == field {
            format!("{} {}", text, sort.direction.arrow())
        } else {
            text.to_string()
        };
        Cell::from(text).style(Style::default().add_modifier(Modifier::BOLD))
    };

    let header = Row::new(vec![
        heading(SortField::Pid, "PID"),
        heading(SortField::Name, "Name"),
        heading(SortField::Cpu, "CPU %"),
        heading(SortField::Memory, "Memory"),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("User").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1);

    let body_height = inner.height.saturating_sub(1) as usize;
    let offset = scroll_offset(app.task_cursor, body_height);

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(body_height)
        .map(|(i, proc)| process_row(app, proc, i == app.task_cursor))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(30),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header);

    frame.render_widget(table, inner);
}

fn process_row<'a>(app: &DashboardApp, proc: &ProcessRecord, selected: bool) -> Row<'a> {
    let killing = app.state.processes.is_killing(proc.pid);
    let status = if killing {
        Cell::from("killing…").style(Style::default().fg(Color::DarkGray))
    } else {
        Cell::from(proc.status.label())
    };

    let mut name = proc.name.clone();
    if proc.is_admin {
        name.push_str(" [admin]");
    }
    if proc.is_suspicious() {
        name.push_str(" ⚠");
    }

    Row::new(vec![
        Cell::from(proc.pid.to_string()),
        Cell::from(name),
        Cell::from(format!("{} {:>5.1}%", cpu_bar(proc.cpu_percent, 6), proc.cpu_percent))
            .style(Style::default().fg(load_color(proc.cpu_percent))),
        Cell::from(format_megabytes(proc.memory_mb)),
        status,
        Cell::from(proc.user.clone()),
    ])
    .style(row_style(selected))
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &DashboardApp, term: &str, focused: bool) {
    let text = if focused {
        Line::from(vec![
            Span::raw(term.to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else if term.is_empty() {
        Line::styled("press / to search", Style::default().fg(Color::DarkGray))
    } else {
        Line::from(term.to_string())
    };

    let mut block = themed_block(app, " Search ");
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_startup(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let startup = &app.state.startup;
    let apps_height = (startup.apps().len() as u16 + 3).min(area.height.saturating_sub(4));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(apps_height), Constraint::Min(3)])
        .split(area);

    let enabled = startup.apps().iter().filter(|a| a.enabled).count();
    let block = themed_block(
        app,
        format!(
            " Startup Apps ({}/{} enabled) [space:toggle] ",
            enabled,
            startup.apps().len()
        ),
    );

    let header = Row::new(vec!["", "Name", "Path", "Impact"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = startup
        .apps()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new(vec![
                Cell::from(checkbox(entry.enabled)),
                Cell::from(entry.name.clone()),
                Cell::from(entry.path.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(entry.impact.label())
                    .style(Style::default().fg(impact_color(entry.impact))),
            ])
            .style(row_style(i == app.startup_cursor))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, chunks[0]);

    let rules_block = themed_block(app, " Event Rules [n:new d:delete] ");
    let inner = rules_block.inner(chunks[1]);
    frame.render_widget(rules_block, chunks[1]);

    if startup.rules().is_empty() {
        frame.render_widget(
            Paragraph::new("No startup rules defined. Press n to add one.")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let app_count = startup.apps().len();
    let lines: Vec<Line> = startup
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            Line::from(vec![
                Span::raw("When "),
                Span::styled(rule.trigger_app.clone(), Style::default().fg(Color::Cyan)),
                Span::raw(" starts → launch "),
                Span::styled(rule.launch_app.clone(), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" after {}s", rule.delay_seconds)),
            ])
            .style(row_style(app_count + i == app.startup_cursor))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_monitor(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    let gauges_block = themed_block(app, " Live ");
    let inner = gauges_block.inner(chunks[0]);
    frame.render_widget(gauges_block, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(inner);

    let current = app.state.metrics.current();
    let network_percent = current.network_kbps / NETWORK_DOMAIN_MAX_KBPS * 100.0;

    frame.render_widget(
        colored_gauge(current.cpu_percent, format!("CPU   {:>5.1}%", current.cpu_percent)),
        rows[0],
    );
    frame.render_widget(
        colored_gauge(current.ram_percent, format!("RAM   {:>5.1}%", current.ram_percent)),
        rows[1],
    );
    frame.render_widget(
        colored_gauge(current.disk_percent, format!("Disk  {:>5.1}%", current.disk_percent)),
        rows[2],
    );
    frame.render_widget(
        colored_gauge(network_percent, format!("Net   {:>5.0} KB/s", current.network_kbps)),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(format!("Temp  {:.1}°C", current.temperature_celsius))
            .style(Style::default().fg(temp_color(current.temperature_celsius))),
        rows[4],
    );

    let history = app.state.metrics.history();
    if history.is_empty() {
        frame.render_widget(
            Paragraph::new("Collecting data...")
                .block(themed_block(app, " History "))
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
        return;
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    let window = history.capacity();
    render_history_chart(frame, charts[0], "CPU", window, &history.cpu_as_u64(), Color::Cyan);
    render_history_chart(frame, charts[1], "RAM", window, &history.ram_as_u64(), Color::Magenta);
    render_history_chart(frame, charts[2], "Disk", window, &history.disk_as_u64(), Color::Yellow);
}

fn render_history_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    window: usize,
    values: &[u64],
    color: Color,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width: u16 = 1;
    let bar_gap: u16 = 1;
    let max_bars = (inner_width / (bar_width + bar_gap) as usize).min(values.len());

    // Take the most recent data points
    let start = values.len().saturating_sub(max_bars);
    let data: Vec<(&str, u64)> = values[start..].iter().map(|&v| ("", v)).collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} History ({}s) ", title, window))
                .borders(Borders::ALL),
        )
        .direction(Direction::Vertical)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
        .data(data.as_slice())
        .max(1000); // percent scaled by 10

    frame.render_widget(chart, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let report = app.state.health();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    let overall_color = health_color(report.overall);
    let summary = vec![
        Line::styled(
            format!("{}", report.overall.score()),
            Style::default()
                .fg(overall_color)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            report.overall.message(),
            Style::default().fg(overall_color),
        ),
    ];
    frame.render_widget(
        Paragraph::new(summary)
            .block(themed_block(app, " Health Score "))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let header = Row::new(vec!["Indicator", "Value", "Status", "Description"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = report
        .indicators
        .iter()
        .map(|reading| {
            Row::new(vec![
                Cell::from(reading.kind.label()),
                Cell::from(format!("{:.1}{}", reading.value, reading.kind.unit())),
                Cell::from(reading.status.label())
                    .style(Style::default().fg(health_color(reading.status))),
                Cell::from(reading.kind.description())
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(themed_block(app, " Indicators "));
    frame.render_widget(table, chunks[1]);
}

fn render_cleaner(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let cache = &app.state.cache;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let summary = if cache.is_cleaning() {
        Line::styled(
            format!("Cleaning {} item(s)...", cache.selection.len()),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(stats) = cache.recent_cleanup(Instant::now()) {
        Line::styled(
            format!(
                "Cleanup complete: removed {} item(s), freed {}",
                stats.removed_items,
                format_bytes(stats.freed_bytes)
            ),
            Style::default().fg(Color::Green),
        )
    } else {
        Line::from(format!(
            "Total: {} │ Selected: {} ({} item(s))",
            format_bytes(cache.total_size()),
            format_bytes(cache.selected_size()),
            cache.selection.len()
        ))
    };
    frame.render_widget(
        Paragraph::new(summary).block(themed_block(app, " Cache Cleaner ")),
        chunks[0],
    );

    let block = themed_block(app, " Locations [space:select a:all p:preview c:clean] ");
    if cache.items().is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing left to clean")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
        return;
    }

    let header = Row::new(vec!["", "Name", "Path", "Type", "Size"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = cache
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Row::new(vec![
                Cell::from(checkbox(cache.selection.contains(&item.id))),
                Cell::from(item.name.clone()),
                Cell::from(item.path.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(item.kind.label()),
                Cell::from(format_bytes(item.size_bytes)),
            ])
            .style(row_style(i == app.cache_cursor))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, chunks[1]);
}

fn render_events(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let counts = count_events(app.state.event_logs());
    let mut spans = Vec::new();
    for event_type in EventType::ALL {
        spans.push(Span::styled(
            format!("{}: {}", event_type.label(), counts.get(event_type)),
            Style::default().fg(event_color(event_type)),
        ));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        format!("Filter: {} [f/0-4]", app.log_filter.label()),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(themed_block(app, " Event Viewer ")),
        chunks[0],
    );

    render_search_box(
        frame,
        chunks[1],
        app,
        &app.log_search,
        app.editing == Some(EditTarget::LogSearch),
    );

    let visible = app.visible_events();
    let block = themed_block(app, format!(" Events ({}) ", visible.len()));
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No events match the current filter")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            chunks[2],
        );
        return;
    }

    let now = app.state.info.clock();
    let body_height = chunks[2].height.saturating_sub(3) as usize;
    let offset = scroll_offset(app.log_cursor, body_height);

    let header = Row::new(vec!["Type", "Source", "Message", "When"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(body_height)
        .map(|(i, entry)| {
            Row::new(vec![
                Cell::from(entry.event_type.label())
                    .style(Style::default().fg(event_color(entry.event_type))),
                Cell::from(entry.source.clone()),
                Cell::from(entry.message.clone()),
                Cell::from(format_time_ago(entry.timestamp, now))
                    .style(Style::default().fg(Color::DarkGray)),
            ])
            .style(row_style(i == app.log_cursor))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(18),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, chunks[2]);
}

fn render_security(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let processes = app.state.processes.processes();
    let summary = app.state.security();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[0]);

    let trust = summary.trust_percent();
    let trust_level = if summary.suspicious_count > 0 {
        SecurityLevel::Warning
    } else {
        SecurityLevel::Good
    };
    let card = |title: &'static str, value: String, level: SecurityLevel| {
        Paragraph::new(Line::styled(
            value,
            Style::default()
                .fg(security_color(level))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL))
    };

    frame.render_widget(card(" Trust ", format!("{:.0}%", trust), trust_level), cards[0]);
    frame.render_widget(
        card(" Admin ", summary.admin_count.to_string(), summary.admin_level()),
        cards[1],
    );
    frame.render_widget(
        card(
            " Unsigned ",
            summary.unsigned_count.to_string(),
            summary.unsigned_level(),
        ),
        cards[2],
    );
    frame.render_widget(
        card(
            " Suspicious ",
            summary.suspicious_count.to_string(),
            summary.suspicious_level(),
        ),
        cards[3],
    );

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let suspicious = suspicious_processes(processes);
    let block = themed_block(app, " Suspicious (admin + unsigned) ");
    if suspicious.is_empty() {
        frame.render_widget(
            Paragraph::new("No suspicious processes detected")
                .block(block)
                .style(Style::default().fg(Color::Green)),
            lists[0],
        );
    } else {
        let lines: Vec<Line> = suspicious
            .iter()
            .map(|p| {
                Line::styled(
                    format!("⚠ {} (PID {})", p.name, p.pid),
                    Style::default().fg(Color::Red),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), lists[0]);
    }

    let admins = admin_processes(processes);
    let lines: Vec<Line> = admins
        .iter()
        .map(|p| {
            let signature = if p.is_signed {
                Span::styled("✓ verified", Style::default().fg(Color::Green))
            } else {
                Span::styled("✗ unverified", Style::default().fg(Color::Red))
            };
            Line::from(vec![
                Span::raw(format!("{:<16} {:>6}  ", p.name, p.pid)),
                signature,
            ])
        })
        .collect();
    let admin_block = themed_block(app, format!(" Elevated processes ({}) ", admins.len()));
    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new("No elevated processes")
                .block(admin_block)
                .style(Style::default().fg(Color::DarkGray)),
            lists[1],
        );
    } else {
        frame.render_widget(Paragraph::new(lines).block(admin_block), lists[1]);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let help = match app.editing {
        Some(EditTarget::RuleForm) => " Tab: Next field │ Enter: Add rule │ Esc: Cancel ",
        Some(_) => " Type to search │ Enter: Done │ Esc: Clear ",
        None => " q: Quit │ ?: Help │ [ ]: Tabs │ Tab: Modules │ s: Settings ",
    };
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_settings_modal(
    frame: &mut Frame,
    area: Rect,
    app: &DashboardApp,
    draft: &crate::core::config::Settings,
    cursor: usize,
) {
    let popup = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            Line::from(format!(
                " {:<22} {}",
                field.label(),
                draft.display_value(*field)
            ))
            .style(row_style(i == cursor))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        " Space: Change │ Enter: Save │ Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    ));

    let block = themed_block(app, " Settings ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_clean_preview(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);

    let cache = &app.state.cache;
    let mut lines: Vec<Line> = cache
        .selected_items()
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::raw(format!(" {:<24}", item.name)),
                Span::styled(format_bytes(item.size_bytes), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!(" Total to free: {}", format_bytes(cache.selected_size())),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        " Enter: Clean │ Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    ));

    let block = Block::default()
        .title(" Cleanup Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_rule_form(frame: &mut Frame, area: Rect, app: &DashboardApp, form: &RuleForm) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let field_line = |label: &str, value: &str, field: RuleField| {
        let active = form.field == field;
        let cursor = if active { "_" } else { "" };
        Line::from(format!(" {:<14} {}{}", label, value, cursor)).style(row_style(active))
    };

    let lines = vec![
        field_line("When app", &form.trigger_app, RuleField::Trigger),
        field_line("Launch app", &form.launch_app, RuleField::Launch),
        field_line("Delay (s)", &form.delay, RuleField::Delay),
        Line::from(""),
        Line::styled(
            " Both apps are required",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(themed_block(app, " New Startup Rule ")),
        popup,
    );
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    CyberSys Dashboard - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc       Quit the application
    ? / h         Toggle this help screen
    [ / ]         Previous / next tab
    Tab           Next module
    Shift+Tab     Previous module
    ↑↓ / j k      Move selection
    Space         Toggle selected row
    /             Search (Tasks, Events)
    1-4           Sort column (Tasks) / type filter (Events)
    0 / f         Clear / cycle event filter
    x             Kill selected process
    n / d         New / delete startup rule
    a / p / c     Select all / preview / clean caches
    s             Settings

    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
