use std::collections::VecDeque;

use super::metrics::MetricSample;

pub const DEFAULT_HISTORY_SIZE: usize = 60;

/// Rolling window of metric samples (for the Monitor charts)
#[derive(Debug, Clone)]
pub struct MetricsHistory {
    capacity: usize,
    samples: VecDeque<MetricSample>,
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: MetricSample) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn samples(&self) -> impl Iterator<Item = &MetricSample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&MetricSample> {
        self.samples.back()
    }

    /// Percent series scaled by 10 to keep one decimal in bar charts (0-1000 range)
    pub fn cpu_as_u64(&self) -> Vec<u64> {
        self.series(|s| s.cpu_percent)
    }

    pub fn ram_as_u64(&self) -> Vec<u64> {
        self.series(|s| s.ram_percent)
    }

    pub fn disk_as_u64(&self) -> Vec<u64> {
        self.series(|s| s.disk_percent)
    }

    fn series<F>(&self, field: F) -> Vec<u64>
    where
        F: Fn(&MetricSample) -> f64,
    {
        self.samples
            .iter()
            .map(|s| (field(s).max(0.0) * 10.0) as u64)
            .collect()
    }
}

impl Default for MetricsHistory {
    fn default() -> Self {
        Self::new()
    }
}
