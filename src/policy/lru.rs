//! LRU Policy Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::hash::Hash;

use super::{EvictionPolicy, OrderList};

// == LRU Policy ==
/// Evicts the key that was inserted or accessed longest ago.
///
/// Keys are stored in an [`OrderList`] where:
/// - Front = Least recently used
/// - Back = Most recently used
#[derive(Debug)]
pub struct LruPolicy<K> {
    order: OrderList<K>,
}

impl<K> Default for LruPolicy<K> {
    fn default() -> Self {
        Self {
            order: OrderList::default(),
        }
    }
}

impl<K: Hash + Eq + Clone> LruPolicy<K> {
    // == Constructor ==
    /// Creates a new empty LRU policy.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used, tracking it if new.
    fn touch(&mut self, key: &K) {
        if !self.order.move_to_back(key) {
            self.order.push_back(key.clone());
        }
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Hash + Eq + Clone + Send + Sync,
{
    fn record_insertion(&mut self, key: &K) {
        self.touch(key);
    }

    fn record_access(&mut self, key: &K) {
        self.order.move_to_back(key);
    }

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
        "lru"
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn evict_all(lru: &mut LruPolicy<&'static str>) -> Vec<&'static str> {
        let mut victims = Vec::new();
        while let Some(&key) = lru.select_eviction_candidate() {
            victims.push(key);
            lru.record_removal(&key);
        }
        victims
    }

    #[test]
    fn test_lru_new() {
        let lru: LruPolicy<&str> = LruPolicy::new();
        assert!(lru.is_empty());
        assert_eq!(lru.select_eviction_candidate(), None);
    }

    #[test]
    fn test_lru_insertion_order() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"key1");
        lru.record_insertion(&"key2");
        lru.record_insertion(&"key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.select_eviction_candidate(), Some(&"key1"));
    }

    #[test]
    fn test_lru_access_moves_to_newest() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"a");
        lru.record_insertion(&"b");
        lru.record_insertion(&"c");

        lru.record_access(&"a");

        assert_eq!(lru.len(), 3);
        assert_eq!(evict_all(&mut lru), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_lru_order_after_multiple_accesses() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"a");
        lru.record_insertion(&"b");
        lru.record_insertion(&"c");

        // Newest last: [b, c, a] -> [b, a, c] -> [a, c, b]
        lru.record_access(&"a");
        lru.record_access(&"c");
        lru.record_access(&"b");

        assert_eq!(evict_all(&mut lru), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_lru_access_untracked_is_noop() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"key1");
        lru.record_access(&"ghost");

        assert_eq!(lru.len(), 1);
        assert!(!lru.contains(&"ghost"));
    }

    #[test]
    fn test_lru_selection_does_not_mutate() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"a");
        lru.record_insertion(&"b");

        assert_eq!(lru.select_eviction_candidate(), Some(&"a"));
        assert_eq!(lru.select_eviction_candidate(), Some(&"a"));
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"key1");
        lru.record_insertion(&"key2");
        lru.record_insertion(&"key3");

        lru.record_removal(&"key1");
        lru.record_removal(&"nonexistent");

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(&"key1"));
        assert_eq!(lru.select_eviction_candidate(), Some(&"key2"));
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = LruPolicy::new();

        lru.record_insertion(&"key1");
        lru.record_insertion(&"key2");
        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.select_eviction_candidate(), None);
    }
}
