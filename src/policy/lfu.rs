//! LFU Policy Module
//!
//! Evicts the least frequently used key. Ties go to the key touched least
//! recently.

use std::collections::HashMap;
use std::hash::Hash;

use super::EvictionPolicy;

#[derive(Debug, Clone, Copy)]
struct AccessInfo {
    /// Starts at 1 on insertion
    frequency: u64,
    /// Logical tick of the last insertion or access
    last_access: u64,
}

// == LFU Policy ==
/// Least frequently used eviction.
///
/// Candidate selection scans every tracked key, O(n). It only runs when an
/// insertion overflows the cache.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    entries: HashMap<K, AccessInfo>,
    /// Monotonic counter standing in for access time
    clock: u64,
}

impl<K> Default for LfuPolicy<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            clock: 0,
        }
    }
}

impl<K: Hash + Eq + Clone> LfuPolicy<K> {
    /// Creates a new empty LFU policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the access count of a tracked key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|info| info.frequency)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Hash + Eq + Clone + Send + Sync,
{
    fn record_insertion(&mut self, key: &K) {
        let now = self.tick();
        self.entries.insert(
            key.clone(),
            AccessInfo {
                frequency: 1,
                last_access: now,
            },
        );
    }

    fn record_access(&mut self, key: &K) {
        if !self.entries.contains_key(key) {
            return;
        }
        let now = self.tick();
        if let Some(info) = self.entries.get_mut(key) {
            info.frequency = info.frequency.saturating_add(1);
            info.last_access = now;
        }
    }

    fn record_removal(&mut self, key: &K) {
        self.entries.remove(key);
    }

    fn select_eviction_candidate(&self) -> Option<&K> {
        self.entries
            .iter()
            .min_by_key(|(_, info)| (info.frequency, info.last_access))
            .map(|(key, _)| key)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn name(&self) -> &'static str {
        "lfu"
    }
}
