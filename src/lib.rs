//! Evict Cache - A bounded in-process key-value cache
//!
//! Provides pluggable eviction (LRU, FIFO, LFU), optional per-entry TTL
//! with lazy and active expiration, and a single reader-writer lock per cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod policy;
pub mod tasks;

pub use cache::{Cache, CacheBuilder, CacheStats, CacheStore, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use policy::{EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, PolicyKind};
pub use tasks::spawn_cleanup_task;
