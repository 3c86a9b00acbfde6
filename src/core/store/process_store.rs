use std::collections::BTreeSet;

use crate::core::telemetry::{ProcessRecord, TelemetryGenerator};

/// Process table plus the kills still waiting for their delay to elapse
#[derive(Debug, Clone)]
pub struct ProcessStore {
    processes: Vec<ProcessRecord>,
    pending_kills: BTreeSet<u32>,
}

impl ProcessStore {
    pub fn new(processes: Vec<ProcessRecord>) -> Self {
        Self {
            processes,
            pending_kills: BTreeSet::new(),
        }
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn perturb(&mut self, generator: &mut TelemetryGenerator) {
        generator.perturb_processes(&mut self.processes);
    }

    /// Mark `pid` as being killed. False if it is unknown or already pending.
    pub fn begin_kill(&mut self, pid: u32) -> bool {
        if self.get(pid).is_none() {
            return false;
        }
        self.pending_kills.insert(pid)
    }

    /// Drop a pending kill that never reached the scheduler
    pub fn cancel_kill(&mut self, pid: u32) -> bool {
        self.pending_kills.remove(&pid)
    }

    pub fn is_killing(&self, pid: u32) -> bool {
        self.pending_kills.contains(&pid)
    }

    /// Remove `pid` from the table. Only that record is touched.
    pub fn finish_kill(&mut self, pid: u32) -> Option<ProcessRecord> {
        self.pending_kills.remove(&pid);
        let index = self.processes.iter().position(|p| p.pid == pid)?;
        let removed = self.processes.remove(index);
        log::info!("Process {} ({}) terminated", removed.name, removed.pid);
        Some(removed)
    }
}
