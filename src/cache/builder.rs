//! Cache Builder Module
//!
//! Assembles a [`Cache`] or [`TtlCache`] and validates the configuration.

use std::hash::Hash;
use std::time::Duration;

use crate::cache::{Cache, TtlCache};
use crate::error::{CacheError, Result};
use crate::policy::{EvictionPolicy, PolicyKind};

// == Cache Builder ==
/// Builder for both cache engines.
///
/// ```
/// use evict_cache::{CacheBuilder, PolicyKind};
///
/// let cache = CacheBuilder::<String>::new(128)
///     .policy_kind(PolicyKind::Lfu)
///     .build_ttl::<u64>()
///     .unwrap();
/// assert_eq!(cache.strategy_name(), "lfu");
/// ```
pub struct CacheBuilder<K> {
    capacity: usize,
    policy: Option<Box<dyn EvictionPolicy<K>>>,
    default_ttl: Option<Duration>,
}

impl<K> CacheBuilder<K> {
    /// Starts a builder with the given capacity and no policy.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: None,
            default_ttl: None,
        }
    }

    /// TTL applied by [`TtlCache::put`]. Ignored by [`Cache`].
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }
}

impl<K> CacheBuilder<K>
where
    K: Hash + Eq + Clone,
{
    /// Uses a caller-provided policy.
    pub fn policy<P>(mut self, policy: P) -> Self
    where
        P: EvictionPolicy<K> + 'static,
    {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Uses one of the built-in policies.
    pub fn policy_kind(mut self, kind: PolicyKind) -> Self
    where
        K: Send + Sync + 'static,
    {
        self.policy = Some(kind.build());
        self
    }

    fn into_parts(self) -> Result<(usize, Box<dyn EvictionPolicy<K>>, Option<Duration>)> {
        let policy = self.policy.ok_or_else(|| {
            CacheError::InvalidConfiguration("No eviction policy supplied".to_string())
        })?;
        Ok((self.capacity, policy, self.default_ttl))
    }

    // == Build ==
    /// Builds a bounded [`Cache`].
    ///
    /// # Errors
    /// `InvalidConfiguration` if no policy was set or the capacity is zero.
    pub fn build<V>(self) -> Result<Cache<K, V>> {
        let (capacity, policy, _) = self.into_parts()?;
        Cache::from_boxed(capacity, policy)
    }

    /// Builds a [`TtlCache`].
    ///
    /// # Errors
    /// `InvalidConfiguration` if no policy was set or the capacity is zero.
    pub fn build_ttl<V>(self) -> Result<TtlCache<K, V>> {
        let (capacity, policy, default_ttl) = self.into_parts()?;
        TtlCache::from_boxed(capacity, policy, default_ttl)
    }
}
