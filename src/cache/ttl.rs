//! TTL Cache Module
//!
//! Bounded cache whose entries may carry an expiry. Expired entries are
//! dropped lazily when read or removed, or eagerly by [`TtlCache::cleanup_expired`].
//! Until then they keep their slot and stay eligible for eviction like any
//! other entry; the policy's own candidate is always the one evicted.

use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, PutOutcome, StatsCounters, TtlEntry};
use crate::error::Result;
use crate::policy::{EvictionPolicy, PolicyKind};

/// State guarded by the cache lock.
struct TtlState<K, V> {
    store: CacheStore<K, TtlEntry<V>>,
    stats: StatsCounters,
}

// == TTL Cache ==
/// Thread-safe bounded cache with per-entry TTL and usage statistics.
pub struct TtlCache<K, V> {
    inner: RwLock<TtlState<K, V>>,
    capacity: usize,
    strategy_name: &'static str,
    /// Applied by `put`; None = entries never expire
    default_ttl: Option<Duration>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructors ==
    /// Creates a TTL cache that owns `policy`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `capacity` is zero.
    pub fn new<P>(capacity: usize, policy: P) -> Result<Self>
    where
        P: EvictionPolicy<K> + 'static,
    {
        Self::from_boxed(capacity, Box::new(policy), None)
    }

    /// Creates a TTL cache using one of the built-in policies.
    pub fn with_policy(capacity: usize, kind: PolicyKind) -> Result<Self>
    where
        K: Send + Sync + 'static,
    {
        Self::from_boxed(capacity, kind.build(), None)
    }

    pub(crate) fn from_boxed(
        capacity: usize,
        policy: Box<dyn EvictionPolicy<K>>,
        default_ttl: Option<Duration>,
    ) -> Result<Self> {
        let store = CacheStore::new(capacity, policy)?;
        let strategy_name = store.strategy_name();
        Ok(Self {
            inner: RwLock::new(TtlState {
                store,
                stats: StatsCounters::default(),
            }),
            capacity,
            strategy_name,
            default_ttl,
        })
    }

    // == Put ==
    /// Stores a value with the default TTL (never expires unless one was configured).
    pub fn put(&self, key: K, value: V) {
        self.insert(key, value, self.default_ttl);
    }

    /// Stores a value that expires `ttl` from now.
    ///
    /// Overwriting an existing key replaces both value and expiry.
    pub fn put_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.insert(key, value, Some(ttl));
    }

    fn insert(&self, key: K, value: V, ttl: Option<Duration>) {
        let now = Instant::now();
        let mut guard = self.inner.write();
        let state = &mut *guard;

        state.stats.record_put();
        if let PutOutcome::Evicted(_, evicted) = state.store.put(key, TtlEntry::new(value, ttl, now)) {
            state.stats.record_eviction();
            if evicted.is_expired_at(now) {
                debug!("Evicted entry had already expired");
            }
        }
    }

    // == Get ==
    /// Returns a clone of the value if present and not expired.
    ///
    /// An expired entry is removed on the spot and counted as both a miss and
    /// an expiration.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let now = Instant::now();
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let expired = match state.store.peek(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                state.stats.record_miss(false);
                return None;
            }
        };

        if expired {
            state.store.remove(key);
            state.stats.record_miss(true);
            debug!("Lazily expired entry on read");
            return None;
        }

        state.stats.record_hit();
        state.store.get(key).map(|entry| entry.value.clone())
    }

    // == Remove ==
    /// Removes a key, returning its value only if it had not expired.
    pub fn remove(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let entry = state.store.remove(key)?;
        if entry.is_expired_at(now) {
            state.stats.record_expirations(1);
            return None;
        }
        Some(entry.value)
    }

    // == Contains Key ==
    /// True if the key is present and not expired. Never removes anything.
    pub fn contains_key(&self, key: &K) -> bool {
        let now = Instant::now();
        self.inner
            .read()
            .store
            .peek(key)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    // == Cleanup Expired ==
    /// Removes every expired entry, returning the number removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let removed = state.store.remove_where(|entry| entry.is_expired_at(now));
        state.stats.record_expirations(removed as u64);

        if removed > 0 {
            debug!(removed, remaining = state.store.len(), "Swept expired entries");
        }
        removed
    }

    // == Count Valid ==
    /// Counts entries that have not expired. Unlike [`len`](Self::len), skips
    /// expired entries still awaiting removal.
    pub fn count_valid(&self) -> usize {
        let now = Instant::now();
        self.inner
            .read()
            .store
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    // == Remaining TTL ==
    /// Time left before `key` expires.
    ///
    /// `Duration::ZERO` if absent or expired, `Duration::MAX` if it never expires.
    pub fn remaining_ttl(&self, key: &K) -> Duration {
        let now = Instant::now();
        match self.inner.read().store.peek(key) {
            Some(entry) if !entry.is_expired_at(now) => entry.remaining_ttl_at(now),
            _ => Duration::ZERO,
        }
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.inner.read();
        CacheStats::snapshot(
            &state.stats,
            state.store.len(),
            self.capacity,
            self.strategy_name,
        )
    }

    // == Length ==
    /// Raw entry count, including expired entries not yet removed.
    pub fn len(&self) -> usize {
        self.inner.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Clear ==
    /// Drops every entry and resets the policy. Statistics are kept.
    pub fn clear(&self) {
        self.inner.write().store.clear();
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy_name
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }
}

impl<K, V> fmt::Debug for TtlCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("capacity", &self.capacity)
            .field("strategy", &self.strategy_name)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
