//! Filtering and ordering of the process table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::telemetry::ProcessRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Pid,
    Cpu,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Current ordering of the task table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for ProcessSort {
    fn default() -> Self {
        Self {
            field: SortField::Cpu,
            direction: SortDirection::Descending,
        }
    }
}

impl ProcessSort {
    /// Reselecting the active field flips direction; a new field starts descending.
    pub fn select(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Descending,
            }
        }
    }
}

/// Case-insensitive substring match on the process name. An empty term matches everything.
pub fn filter_processes<'a>(processes: &'a [ProcessRecord], term: &str) -> Vec<&'a ProcessRecord> {
    let needle = term.to_lowercase();
    processes
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

fn compare_ascending(a: &ProcessRecord, b: &ProcessRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortField::Pid => a.pid.cmp(&b.pid),
        SortField::Cpu => a.cpu_percent.total_cmp(&b.cpu_percent),
        SortField::Memory => a.memory_mb.total_cmp(&b.memory_mb),
    }
}

/// Stable sort in place
pub fn sort_processes(processes: &mut [&ProcessRecord], sort: ProcessSort) {
    processes.sort_by(|a, b| {
        let ordering = compare_ascending(a, b, sort.field);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Filter then sort; what the task table renders.
pub fn process_view<'a>(
    processes: &'a [ProcessRecord],
    term: &str,
    sort: ProcessSort,
) -> Vec<&'a ProcessRecord> {
    let mut visible = filter_processes(processes, term);
    sort_processes(&mut visible, sort);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::telemetry::ProcessStatus;

    fn record(pid: u32, name: &str, cpu: f64, memory: f64) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_mb: memory,
            status: ProcessStatus::Running,
            user: "User".to_string(),
            is_admin: false,
            is_signed: true,
        }
    }

    fn sample() -> Vec<ProcessRecord> {
        vec![
            record(1000, "Chrome", 12.0, 300.0),
            record(1123, "chromium", 4.0, 120.0),
            record(1246, "Discord", 25.0, 80.0),
            record(1369, "Node", 1.0, 410.0),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let processes = sample();
        let names: Vec<_> = filter_processes(&processes, "CHROM")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chrome", "chromium"]);
    }

    #[test]
    fn test_empty_term_keeps_all() {
        let processes = sample();
        assert_eq!(filter_processes(&processes, "").len(), processes.len());
    }

    #[test]
    fn test_select_toggles_direction() {
        let sort = ProcessSort::default();
        assert_eq!(sort.field, SortField::Cpu);
        assert_eq!(sort.direction, SortDirection::Descending);

        let sort = sort.select(SortField::Cpu);
        assert_eq!(sort.direction, SortDirection::Ascending);

        let sort = sort.select(SortField::Name);
        assert_eq!(sort.field, SortField::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_by_memory_descending() {
        let processes = sample();
        let view = process_view(
            &processes,
            "",
            ProcessSort {
                field: SortField::Memory,
                direction: SortDirection::Descending,
            },
        );
        let pids: Vec<_> = view.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1369, 1000, 1123, 1246]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let processes = sample();
        let view = process_view(
            &processes,
            "",
            ProcessSort {
                field: SortField::Name,
                direction: SortDirection::Ascending,
            },
        );
        let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chrome", "chromium", "Discord", "Node"]);
    }

    #[test]
    fn test_sort_keeps_ties_in_input_order() {
        let processes = vec![
            record(1, "a", 5.0, 1.0),
            record(2, "b", 5.0, 1.0),
            record(3, "c", 5.0, 1.0),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let view = process_view(
                &processes,
                "",
                ProcessSort {
                    field: SortField::Cpu,
                    direction,
                },
            );
            let pids: Vec<_> = view.iter().map(|p| p.pid).collect();
            assert_eq!(pids, vec![1, 2, 3]);
        }
    }
}
