//! FIFO Policy Module
//!
//! Evicts keys in the order they were inserted. Reads and updates never
//! change a key's position.

use std::hash::Hash;

use super::{EvictionPolicy, OrderList};

// == FIFO Policy ==
/// First in, first out eviction.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    /// Front = earliest inserted
    order: OrderList<K>,
}

impl<K> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self {
            order: OrderList::default(),
        }
    }
}

impl<K: Hash + Eq + Clone> FifoPolicy<K> {
    /// Creates a new empty FIFO policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Hash + Eq + Clone + Send + Sync,
{
    fn record_insertion(&mut self, key: &K) {
        // A key already queued keeps its original slot.
        if !self.order.contains(key) {
            self.order.push_back(key.clone());
        }
    }

    fn record_access(&mut self, _key: &K) {}

    fn record_removal(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn select_eviction_candidate(&self) -> Option<&K> {
        self.order.front()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}
