//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::{CacheBuilder, TtlCache};
use crate::error::Result;
use crate::policy::PolicyKind;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy used when the cache is full
    pub policy: PolicyKind,
    /// Default TTL in milliseconds for `put` without explicit TTL (0 = never expire)
    pub default_ttl_ms: u64,
    /// Background cleanup task interval in milliseconds
    pub cleanup_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `EVICTION_POLICY` - `lru`, `fifo` or `lfu` (default: lru)
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds, 0 disables (default: 0)
    /// - `CLEANUP_INTERVAL_MS` - Cleanup frequency in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            policy: parse_var("EVICTION_POLICY").unwrap_or(defaults.policy),
            default_ttl_ms: parse_var("DEFAULT_TTL_MS").unwrap_or(defaults.default_ttl_ms),
            cleanup_interval_ms: parse_var("CLEANUP_INTERVAL_MS")
                .unwrap_or(defaults.cleanup_interval_ms),
        }
    }

    /// Default TTL as a duration, None when disabled.
    pub fn default_ttl(&self) -> Option<Duration> {
        (self.default_ttl_ms > 0).then(|| Duration::from_millis(self.default_ttl_ms))
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_millis(self.cleanup_interval_ms)
    }

    /// Builds a TTL cache from this configuration.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the capacity is zero.
    pub fn build_ttl_cache<K, V>(&self) -> Result<TtlCache<K, V>>
    where
        K: Hash + Eq + Clone + Send + Sync + 'static,
    {
        let mut builder = CacheBuilder::new(self.capacity).policy_kind(self.policy);
        if let Some(ttl) = self.default_ttl() {
            builder = builder.default_ttl(ttl);
        }
        builder.build_ttl()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            policy: PolicyKind::Lru,
            default_ttl_ms: 0,
            cleanup_interval_ms: 1000,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.policy, PolicyKind::Lru);
        assert_eq!(config.default_ttl(), None);
        assert_eq!(config.cleanup_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("EVICTION_POLICY");
        env::remove_var("DEFAULT_TTL_MS");
        env::remove_var("CLEANUP_INTERVAL_MS");

        let config = Config::from_env();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.policy, PolicyKind::Lru);
        assert_eq!(config.default_ttl_ms, 0);
        assert_eq!(config.cleanup_interval_ms, 1000);

        env::set_var("CACHE_CAPACITY", "42");
        env::set_var("EVICTION_POLICY", "LFU");
        env::set_var("DEFAULT_TTL_MS", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.capacity, 42);
        assert_eq!(config.policy, PolicyKind::Lfu);
        assert_eq!(config.default_ttl_ms, 0);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("EVICTION_POLICY");
        env::remove_var("DEFAULT_TTL_MS");
    }

    #[test]
    fn test_build_ttl_cache() {
        let config = Config {
            capacity: 8,
            policy: PolicyKind::Fifo,
            default_ttl_ms: 5_000,
            cleanup_interval_ms: 100,
        };

        let cache: TtlCache<String, u32> = config.build_ttl_cache().unwrap();
        assert_eq!(cache.capacity(), 8);
        assert_eq!(cache.strategy_name(), "fifo");
        assert_eq!(cache.default_ttl(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_build_ttl_cache_zero_capacity() {
        let config = Config {
            capacity: 0,
            ..Config::default()
        };

        let result = config.build_ttl_cache::<String, u32>();
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }
}
