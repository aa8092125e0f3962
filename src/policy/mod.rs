//! Eviction Policy Module
//!
//! Pluggable bookkeeping that decides which key a full cache gives up.
//! A policy tracks keys only; it never sees values or the capacity.

mod fifo;
mod lfu;
mod lru;
mod order_list;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use order_list::OrderList;

// == Eviction Policy ==
/// Contract between a cache engine and its eviction algorithm.
///
/// The engine calls `record_insertion` once per new key and `record_removal`
/// once per key leaving the mapping, so the tracked key set always mirrors
/// the mapping.
pub trait EvictionPolicy<K>: Send + Sync {
    /// Begins tracking a newly inserted key.
    fn record_insertion(&mut self, key: &K);

    /// Notes a read hit or an in-place update. No-op for untracked keys.
    fn record_access(&mut self, key: &K);

    /// Stops tracking a key.
    fn record_removal(&mut self, key: &K);

    /// Nominates the key to evict, or `None` when nothing is tracked.
    fn select_eviction_candidate(&self) -> Option<&K>;

    /// Drops all tracked metadata.
    fn clear(&mut self);

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is tracked.
    fn contains(&self, key: &K) -> bool;

    /// Diagnostic identifier of the algorithm.
    fn name(&self) -> &'static str;
}

// == Policy Kind ==
/// Selector for the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Least recently used
    #[default]
    Lru,
    /// First in, first out
    Fifo,
    /// Least frequently used
    Lfu,
}

impl PolicyKind {
    /// All built-in policies.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Lru, PolicyKind::Fifo, PolicyKind::Lfu];

    /// Instantiates a fresh policy of this kind.
    pub fn build<K>(self) -> Box<dyn EvictionPolicy<K>>
    where
        K: Hash + Eq + Clone + Send + Sync + 'static,
    {
        match self {
            PolicyKind::Lru => Box::new(LruPolicy::new()),
            PolicyKind::Fifo => Box::new(FifoPolicy::new()),
            PolicyKind::Lfu => Box::new(LfuPolicy::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "fifo" => Ok(PolicyKind::Fifo),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(CacheError::InvalidConfiguration(format!(
                "Unknown eviction policy '{}', expected one of: lru, fifo, lfu",
                other
            ))),
        }
    }
}
