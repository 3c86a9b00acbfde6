use serde::{Deserialize, Serialize};

use crate::core::telemetry::{EventLogEntry, EventType};

/// Category selector of the Events module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFilter {
    #[default]
    All,
    Only(EventType),
}

impl LogFilter {
    pub fn matches(&self, event_type: EventType) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Only(wanted) => *wanted == event_type,
        }
    }

    /// all -> critical -> error -> warning -> info -> all
    pub fn next(self) -> Self {
        match self {
            LogFilter::All => LogFilter::Only(EventType::Critical),
            LogFilter::Only(EventType::Critical) => LogFilter::Only(EventType::Error),
            LogFilter::Only(EventType::Error) => LogFilter::Only(EventType::Warning),
            LogFilter::Only(EventType::Warning) => LogFilter::Only(EventType::Info),
            LogFilter::Only(EventType::Info) => LogFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogFilter::All => "All Events",
            LogFilter::Only(t) => t.label(),
        }
    }
}

/// Category match AND case-insensitive search over message or source.
pub fn filter_events<'a>(
    logs: &'a [EventLogEntry],
    filter: LogFilter,
    search: &str,
) -> Vec<&'a EventLogEntry> {
    let needle = search.to_lowercase();
    logs.iter()
        .filter(|log| filter.matches(log.event_type))
        .filter(|log| {
            log.message.to_lowercase().contains(&needle)
                || log.source.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Per-category totals, independent of the active filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub critical: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl EventCounts {
    pub fn get(&self, event_type: EventType) -> usize {
        match event_type {
            EventType::Critical => self.critical,
            EventType::Error => self.error,
            EventType::Warning => self.warning,
            EventType::Info => self.info,
        }
    }
}

pub fn count_events(logs: &[EventLogEntry]) -> EventCounts {
    logs.iter()
        .fold(EventCounts::default(), |mut counts, log| {
            match log.event_type {
                EventType::Critical => counts.critical += 1,
                EventType::Error => counts.error += 1,
                EventType::Warning => counts.warning += 1,
                EventType::Info => counts.info += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::telemetry::catalog;
    use chrono::Local;

    #[test]
    fn test_all_with_empty_search_keeps_everything() {
        let logs = catalog::event_logs(Local::now());
        assert_eq!(filter_events(&logs, LogFilter::All, "").len(), logs.len());
    }

    #[test]
    fn test_category_filter() {
        let logs = catalog::event_logs(Local::now());
        let errors = filter_events(&logs, LogFilter::Only(EventType::Error), "");
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|l| l.event_type == EventType::Error));
    }

    #[test]
    fn test_search_matches_source_or_message() {
        let logs = catalog::event_logs(Local::now());

        // "kernel" only appears in a source
        let hits = filter_events(&logs, LogFilter::All, "KERNEL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "4");

        // "crashed" only appears in a message
        let hits = filter_events(&logs, LogFilter::All, "crashed");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_filter_and_search_combine() {
        let logs = catalog::event_logs(Local::now());
        let hits = filter_events(&logs, LogFilter::Only(EventType::Warning), "application");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_counts() {
        let logs = catalog::event_logs(Local::now());
        let counts = count_events(&logs);
        assert_eq!(
            counts,
            EventCounts {
                critical: 1,
                error: 2,
                warning: 2,
                info: 2,
            }
        );
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut filter = LogFilter::All;
        for _ in 0..5 {
            filter = filter.next();
        }
        assert_eq!(filter, LogFilter::All);
    }
}
