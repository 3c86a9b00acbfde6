//! Privilege and signature posture of the process table.

use serde::{Deserialize, Serialize};

use crate::core::telemetry::ProcessRecord;

/// Card thresholds: more than this many is a warning
const ADMIN_WARNING_COUNT: usize = 5;
const UNSIGNED_WARNING_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySummary {
    pub total: usize,
    pub admin_count: usize,
    pub unsigned_count: usize,
    pub suspicious_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityLevel {
    Good,
    Warning,
    Alert,
}

impl SecuritySummary {
    pub fn admin_level(&self) -> SecurityLevel {
        if self.admin_count > ADMIN_WARNING_COUNT {
            SecurityLevel::Warning
        } else {
            SecurityLevel::Good
        }
    }

    pub fn unsigned_level(&self) -> SecurityLevel {
        if self.unsigned_count > UNSIGNED_WARNING_COUNT {
            SecurityLevel::Warning
        } else {
            SecurityLevel::Good
        }
    }

    pub fn suspicious_level(&self) -> SecurityLevel {
        if self.suspicious_count > 0 {
            SecurityLevel::Alert
        } else {
            SecurityLevel::Good
        }
    }

    /// Share of processes that are not suspicious, 100 for an empty table
    pub fn trust_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.suspicious_count) as f64 / self.total as f64 * 100.0
    }
}

pub fn summarize_security(processes: &[ProcessRecord]) -> SecuritySummary {
    processes
        .iter()
        .fold(SecuritySummary::default(), |mut summary, p| {
            summary.total += 1;
            if p.is_admin {
                summary.admin_count += 1;
            }
            if !p.is_signed {
                summary.unsigned_count += 1;
            }
            if p.is_suspicious() {
                summary.suspicious_count += 1;
            }
            summary
        })
}

pub fn admin_processes(processes: &[ProcessRecord]) -> Vec<&ProcessRecord> {
    processes.iter().filter(|p| p.is_admin).collect()
}

pub fn suspicious_processes(processes: &[ProcessRecord]) -> Vec<&ProcessRecord> {
    processes.iter().filter(|p| p.is_suspicious()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::telemetry::ProcessStatus;

    fn record(pid: u32, is_admin: bool, is_signed: bool) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: format!("proc{}", pid),
            cpu_percent: 0.0,
            memory_mb: 0.0,
            status: ProcessStatus::Running,
            user: "SYSTEM".to_string(),
            is_admin,
            is_signed,
        }
    }

    #[test]
    fn test_summary_counts() {
        let processes = vec![
            record(1, true, true),
            record(2, true, false),
            record(3, false, false),
            record(4, false, true),
        ];
        let summary = summarize_security(&processes);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.admin_count, 2);
        assert_eq!(summary.unsigned_count, 2);
        assert_eq!(summary.suspicious_count, 1);
        assert_eq!(summary.trust_percent(), 75.0);

        let suspicious = suspicious_processes(&processes);
        assert_eq!(suspicious.len(), 1);
        assert_eq!(suspicious[0].pid, 2);
    }

    #[test]
    fn test_card_levels() {
        let summary = SecuritySummary {
            total: 10,
            admin_count: 5,
            unsigned_count: 4,
            suspicious_count: 0,
        };
        assert_eq!(summary.admin_level(), SecurityLevel::Good);
        assert_eq!(summary.unsigned_level(), SecurityLevel::Warning);
        assert_eq!(summary.suspicious_level(), SecurityLevel::Good);

        let summary = SecuritySummary {
            admin_count: 6,
            suspicious_count: 1,
            ..summary
        };
        assert_eq!(summary.admin_level(), SecurityLevel::Warning);
        assert_eq!(summary.suspicious_level(), SecurityLevel::Alert);
    }

    #[test]
    fn test_empty_table() {
        let summary = summarize_security(&[]);
        assert_eq!(summary, SecuritySummary::default());
        assert_eq!(summary.trust_percent(), 100.0);
    }
}
