use std::time::{Duration, Instant};

use crate::core::derived::{total_size, CacheSelection};
use crate::core::telemetry::CacheItem;

/// How long the "cleanup complete" banner stays up
pub const CLEAN_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Outcome of a finished cleanup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupStats {
    pub removed_items: usize,
    pub freed_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct CacheStore {
    items: Vec<CacheItem>,
    pub selection: CacheSelection,
    cleaning: bool,
    last_cleanup: Option<(Instant, CleanupStats)>,
}

impl CacheStore {
    pub fn new(items: Vec<CacheItem>) -> Self {
        Self {
            items,
            selection: CacheSelection::new(),
            cleaning: false,
            last_cleanup: None,
        }
    }

    pub fn items(&self) -> &[CacheItem] {
        &self.items
    }

    pub fn total_size(&self) -> u64 {
        total_size(&self.items)
    }

    pub fn selected_size(&self) -> u64 {
        self.selection.selected_size(&self.items)
    }

    pub fn selected_items(&self) -> Vec<&CacheItem> {
        self.items
            .iter()
            .filter(|item| self.selection.contains(&item.id))
            .collect()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.cleaning {
            self.selection.toggle(id);
        }
    }

    pub fn toggle_all(&mut self) {
        if !self.cleaning {
            self.selection.toggle_all(&self.items);
        }
    }

    pub fn is_cleaning(&self) -> bool {
        self.cleaning
    }

    /// Start a cleanup of the current selection.
    ///
    /// Returns the ids to hand to the scheduler, or `None` when nothing is selected or a
    /// cleanup is already running.
    pub fn begin_clean(&mut self) -> Option<Vec<String>> {
        if self.cleaning || self.selection.is_empty() {
            return None;
        }
        self.cleaning = true;
        Some(self.selection.ids())
    }

    /// Leave the cleaning state without touching items; the selection is kept
    pub fn abort_clean(&mut self) {
        self.cleaning = false;
    }

    pub fn finish_clean(&mut self, ids: &[String], now: Instant) -> CleanupStats {
        let before = self.items.len();
        let mut freed_bytes = 0;
        self.items.retain(|item| {
            let doomed = ids.contains(&item.id);
            if doomed {
                freed_bytes += item.size_bytes;
            }
            !doomed
        });

        let stats = CleanupStats {
            removed_items: before - self.items.len(),
            freed_bytes,
        };

        self.selection.clear();
        self.cleaning = false;
        self.last_cleanup = Some((now, stats));
        log::info!(
            "Cleaned {} cache locations ({} bytes)",
            stats.removed_items,
            stats.freed_bytes
        );
        stats
    }

    /// Stats of the last cleanup while its banner is still visible
    pub fn recent_cleanup(&self, now: Instant) -> Option<CleanupStats> {
        match self.last_cleanup {
            Some((at, stats)) if now.saturating_duration_since(at) < CLEAN_BANNER_DURATION => {
                Some(stats)
            }
            _ => None,
        }
    }
}
