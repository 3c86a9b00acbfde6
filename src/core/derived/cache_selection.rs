use std::collections::BTreeSet;

use crate::core::telemetry::CacheItem;

/// Ids ticked in the Cleaner module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSelection {
    ids: BTreeSet<String>,
}

impl CacheSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// True when every listed item is selected (and there is at least one item)
    pub fn is_all_selected(&self, items: &[CacheItem]) -> bool {
        !items.is_empty() && items.iter().all(|item| self.ids.contains(&item.id))
    }

    /// Full selection becomes empty, anything else becomes full
    pub fn toggle_all(&mut self, items: &[CacheItem]) {
        if self.is_all_selected(items) {
            self.ids.clear();
        } else {
            self.ids = items.iter().map(|item| item.id.clone()).collect();
        }
    }

    pub fn selected_size(&self, items: &[CacheItem]) -> u64 {
        selected_size(items, &self.ids)
    }
}

/// Sum of sizes over the items whose id is in `ids`.
pub fn selected_size(items: &[CacheItem], ids: &BTreeSet<String>) -> u64 {
    items
        .iter()
        .filter(|item| ids.contains(&item.id))
        .map(|item| item.size_bytes)
        .sum()
}

pub fn total_size(items: &[CacheItem]) -> u64 {
    items.iter().map(|item| item.size_bytes).sum()
}
