//! Cache Statistics Module
//!
//! Tracks TTL cache usage: puts, gets, hits, misses, expirations and evictions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Stats Counters ==
/// Monotonic counters owned by the TTL engine.
#[derive(Debug, Clone, Default)]
pub(crate) struct StatsCounters {
    pub total_puts: u64,
    pub total_gets: u64,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
}

impl StatsCounters {
    pub fn record_put(&mut self) {
        self.total_puts += 1;
    }

    pub fn record_hit(&mut self) {
        self.total_gets += 1;
        self.hits += 1;
    }

    /// A get that found nothing usable. Expired entries also count an expiration.
    pub fn record_miss(&mut self, expired: bool) {
        self.total_gets += 1;
        self.misses += 1;
        if expired {
            self.expirations += 1;
        }
    }

    pub fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Cache Stats ==
/// Point-in-time snapshot of a TTL cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of put calls
    pub total_puts: u64,
    /// Number of get calls
    pub total_gets: u64,
    /// Gets that returned a value
    pub cache_hits: u64,
    /// Gets that found nothing or an expired entry
    pub cache_misses: u64,
    /// Entries dropped because their TTL elapsed
    pub expirations: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// cache_hits / total_gets, 0.0 before the first get
    pub hit_rate: f64,
    /// Entries currently held, including expired ones not yet swept
    pub size: usize,
    pub capacity: usize,
    pub strategy_name: String,
    pub captured_at: DateTime<Utc>,
}

impl CacheStats {
    pub(crate) fn snapshot(
        counters: &StatsCounters,
        size: usize,
        capacity: usize,
        strategy_name: &str,
    ) -> Self {
        let hit_rate = if counters.total_gets == 0 {
            0.0
        } else {
            counters.hits as f64 / counters.total_gets as f64
        };

        Self {
            total_puts: counters.total_puts,
            total_gets: counters.total_gets,
            cache_hits: counters.hits,
            cache_misses: counters.misses,
            expirations: counters.expirations,
            evictions: counters.evictions,
            hit_rate,
            size,
            capacity,
            strategy_name: strategy_name.to_string(),
            captured_at: Utc::now(),
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "puts={} gets={} hits={} misses={} expirations={} evictions={} hit_rate={:.2}% size={}/{} strategy={}",
            self.total_puts,
            self.total_gets,
            self.cache_hits,
            self.cache_misses,
            self.expirations,
            self.evictions,
            self.hit_rate * 100.0,
            self.size,
            self.capacity,
            self.strategy_name
        )
    }
}
