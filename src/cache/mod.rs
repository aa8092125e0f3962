//! Cache Module
//!
//! Bounded in-memory caches with pluggable eviction and optional TTL expiration.

mod bounded;
mod builder;
mod entry;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use bounded::Cache;
pub use builder::CacheBuilder;
pub use entry::TtlEntry;
pub use stats::CacheStats;
pub(crate) use stats::StatsCounters;
pub use store::{CacheStore, PutOutcome};
pub use ttl::TtlCache;
