//! Cache Store Module
//!
//! Unsynchronised cache engine: a `HashMap` for storage, an explicit entry
//! counter and a boxed [`EvictionPolicy`] that picks victims on overflow.
//! [`Cache`](crate::cache::Cache) and [`TtlCache`](crate::cache::TtlCache)
//! put one of these behind a lock.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::policy::EvictionPolicy;

// == Put Outcome ==
/// What a [`CacheStore::put`] did to the mapping.
#[derive(Debug, PartialEq, Eq)]
pub enum PutOutcome<K, S> {
    /// Existing key overwritten in place
    Updated,
    /// New key added with room to spare
    Inserted,
    /// New key added and this entry evicted to stay within capacity
    Evicted(K, S),
}

// == Cache Store ==
/// Bounded key-value storage with policy-driven eviction.
///
/// Every key entering or leaving `entries` is mirrored by exactly one policy
/// callback, so the policy always tracks the same key set as the map.
pub struct CacheStore<K, S> {
    /// Key-value storage
    entries: HashMap<K, S>,
    /// Eviction bookkeeping
    policy: Box<dyn EvictionPolicy<K>>,
    /// Live entry count, equal to `entries.len()` between operations
    len: usize,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, S> CacheStore<K, S>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `capacity` is zero.
    pub fn new(capacity: usize, policy: Box<dyn EvictionPolicy<K>>) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "Capacity must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            policy,
            len: 0,
            capacity,
        })
    }

    // == Peek ==
    /// Looks up a key without informing the policy.
    pub fn peek(&self, key: &K) -> Option<&S> {
        self.entries.get(key)
    }

    // == Get ==
    /// Looks up a key and records the access with the policy on a hit.
    pub fn get(&mut self, key: &K) -> Option<&S> {
        let slot = self.entries.get(key)?;
        self.policy.record_access(key);
        Some(slot)
    }

    // == Put ==
    /// Inserts or overwrites an entry.
    ///
    /// Overwrites count as an access and never evict. A new key that pushes
    /// the count past capacity evicts exactly one policy-selected entry.
    pub fn put(&mut self, key: K, slot: S) -> PutOutcome<K, S> {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = slot;
            self.policy.record_access(&key);
            return PutOutcome::Updated;
        }

        self.entries.insert(key.clone(), slot);
        self.policy.record_insertion(&key);
        self.len += 1;

        let outcome = if self.len > self.capacity {
            self.evict_one()
        } else {
            PutOutcome::Inserted
        };
        self.debug_check();
        outcome
    }

    fn evict_one(&mut self) -> PutOutcome<K, S> {
        let Some(victim) = self.policy.select_eviction_candidate().cloned() else {
            return PutOutcome::Inserted;
        };

        match self.entries.remove(&victim) {
            Some(evicted) => {
                self.policy.record_removal(&victim);
                self.len -= 1;
                debug!(
                    strategy = self.policy.name(),
                    capacity = self.capacity,
                    "Evicted entry to stay within capacity"
                );
                PutOutcome::Evicted(victim, evicted)
            }
            None => {
                // Policy nominated a key the map no longer holds; drop the stale record.
                self.policy.record_removal(&victim);
                PutOutcome::Inserted
            }
        }
    }

    // == Remove ==
    /// Removes an entry, returning it if present.
    pub fn remove(&mut self, key: &K) -> Option<S> {
        let slot = self.entries.remove(key)?;
        self.policy.record_removal(key);
        self.len -= 1;
        self.debug_check();
        Some(slot)
    }

    // == Remove Where ==
    /// Removes every entry matching `predicate`, returning how many went.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&S) -> bool,
    {
        let doomed: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, slot)| predicate(slot))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &doomed {
            self.entries.remove(key);
            self.policy.record_removal(key);
            self.len -= 1;
        }

        self.debug_check();
        doomed.len()
    }

    // == Contains Key ==
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates stored slots in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &S> {
        self.entries.values()
    }

    /// Iterates stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Clear ==
    /// Drops every entry and resets the policy.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.policy.clear();
        self.len = 0;
    }

    /// Identifier of the active policy.
    pub fn strategy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Read-only access to the policy, mainly for inspection in tests.
    pub fn policy(&self) -> &dyn EvictionPolicy<K> {
        self.policy.as_ref()
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.len, self.entries.len());
        debug_assert_eq!(self.len, self.policy.len());
    }
}

impl<K, S> fmt::Debug for CacheStore<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("strategy", &self.policy.name())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{LfuPolicy, LruPolicy, PolicyKind};

    fn store(capacity: usize, kind: PolicyKind) -> CacheStore<u32, &'static str> {
        CacheStore::new(capacity, kind.build()).unwrap()
    }

    #[test]
    fn test_store_new() {
        let store = store(100, PolicyKind::Lru);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
        assert_eq!(store.strategy_name(), "lru");
    }

    #[test]
    fn test_store_zero_capacity() {
        let result: Result<CacheStore<u32, u32>> =
            CacheStore::new(0, Box::new(LruPolicy::new()));
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = store(10, PolicyKind::Lru);

        assert_eq!(store.put(1, "one"), PutOutcome::Inserted);
        assert_eq!(store.get(&1), Some(&"one"));
        assert_eq!(store.get(&2), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_is_update() {
        let mut store = store(1, PolicyKind::Lru);

        store.put(1, "one");
        assert_eq!(store.put(1, "uno"), PutOutcome::Updated);

        assert_eq!(store.len(), 1);
        assert_eq!(store.peek(&1), Some(&"uno"));
    }

    #[test]
    fn test_store_eviction_returns_victim() {
        let mut store = store(2, PolicyKind::Lru);

        store.put(1, "one");
        store.put(2, "two");
        store.get(&1);

        assert_eq!(store.put(3, "three"), PutOutcome::Evicted(2, "two"));
        assert_eq!(store.len(), 2);
        assert!(!store.contains_key(&2));
        assert!(!store.policy().contains(&2));
    }

    #[test]
    fn test_store_peek_does_not_touch_policy() {
        let mut store = store(2, PolicyKind::Lru);

        store.put(1, "one");
        store.put(2, "two");
        store.peek(&1);
        store.put(3, "three");

        assert!(!store.contains_key(&1));
    }

    #[test]
    fn test_store_lfu_update_counts_as_access() {
        let mut store: CacheStore<u32, u32> =
            CacheStore::new(2, Box::new(LfuPolicy::new())).unwrap();

        store.put(1, 10);
        store.put(2, 20);
        store.put(1, 11);
        store.put(3, 30);

        assert!(store.contains_key(&1));
        assert!(!store.contains_key(&2));
    }

    #[test]
    fn test_store_remove() {
        let mut store = store(10, PolicyKind::Fifo);

        store.put(1, "one");
        assert_eq!(store.remove(&1), Some("one"));
        assert_eq!(store.remove(&1), None);
        assert!(store.is_empty());
        assert!(store.policy().is_empty());
    }

    #[test]
    fn test_store_remove_where() {
        let mut store: CacheStore<u32, u32> = CacheStore::new(10, PolicyKind::Lru.build()).unwrap();
        for i in 0..6 {
            store.put(i, i * 10);
        }

        let removed = store.remove_where(|value| *value >= 30);

        assert_eq!(removed, 3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.policy().len(), 3);
        let mut keys: Vec<u32> = store.keys().copied().collect();
        keys.sort();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn test_store_clear() {
        let mut store = store(10, PolicyKind::Lfu);

        store.put(1, "one");
        store.put(2, "two");
        store.clear();

        assert!(store.is_empty());
        assert!(store.policy().is_empty());
        assert_eq!(store.put(3, "three"), PutOutcome::Inserted);
    }
}
