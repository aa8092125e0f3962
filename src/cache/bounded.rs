//! Bounded Cache Module
//!
//! Thread-safe cache: a [`CacheStore`] behind a single reader-writer lock.

use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::cache::{CacheBuilder, CacheStore};
use crate::error::Result;
use crate::policy::{EvictionPolicy, PolicyKind};

// == Cache ==
/// Bounded, thread-safe cache with a pluggable eviction policy.
///
/// `get` takes the write lock because a hit updates policy bookkeeping.
/// `len` and `contains_key` only take the read lock.
pub struct Cache<K, V> {
    inner: RwLock<CacheStore<K, V>>,
    capacity: usize,
    strategy_name: &'static str,
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructors ==
    /// Creates a cache that owns `policy`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `capacity` is zero.
    pub fn new<P>(capacity: usize, policy: P) -> Result<Self>
    where
        P: EvictionPolicy<K> + 'static,
    {
        Self::from_boxed(capacity, Box::new(policy))
    }

    /// Creates a cache using one of the built-in policies.
    pub fn with_policy(capacity: usize, kind: PolicyKind) -> Result<Self>
    where
        K: Send + Sync + 'static,
    {
        Self::from_boxed(capacity, kind.build())
    }

    /// Starts a [`CacheBuilder`].
    pub fn builder(capacity: usize) -> CacheBuilder<K> {
        CacheBuilder::new(capacity)
    }

    pub(crate) fn from_boxed(capacity: usize, policy: Box<dyn EvictionPolicy<K>>) -> Result<Self> {
        let store = CacheStore::new(capacity, policy)?;
        let strategy_name = store.strategy_name();
        Ok(Self {
            inner: RwLock::new(store),
            capacity,
            strategy_name,
        })
    }

    // == Get ==
    /// Returns a clone of the value, recording the access on a hit.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.write().get(key).cloned()
    }

    // == Put ==
    /// Inserts or overwrites a value, evicting one entry if the cache overflows.
    pub fn put(&self, key: K, value: V) {
        self.inner.write().put(key, value);
    }

    // == Remove ==
    /// Removes a key, returning its value if it was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    // == Contains Key ==
    /// Checks presence without touching the policy.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Clear ==
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy_name
    }

    /// Returns a sorted copy of the current keys.
    pub fn keys(&self) -> Vec<K>
    where
        K: Ord,
    {
        let mut keys: Vec<K> = self.inner.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl<K, V> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("capacity", &self.capacity)
            .field("strategy", &self.strategy_name)
            .finish()
    }
}
