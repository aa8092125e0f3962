//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries from a [`TtlCache`].

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between runs.
/// Each run holds the cache's write lock only for the duration of one
/// [`TtlCache::cleanup_expired`] call.
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(TtlCache::with_policy(1000, PolicyKind::Lru)?);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V>(cache: Arc<TtlCache<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            strategy = cache.strategy_name(),
            "Starting TTL cleanup task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyKind;

    fn shared_cache() -> Arc<TtlCache<String, String>> {
        Arc::new(TtlCache::with_policy(100, PolicyKind::Lru).unwrap())
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = shared_cache();

        cache.put_with_ttl(
            "expire_soon".to_string(),
            "value".to_string(),
            Duration::from_millis(50),
        );

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(100));

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(350)).await;

        // Swept without any read touching it
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().expirations, 1);
        assert_eq!(cache.stats().total_gets, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = shared_cache();

        cache.put_with_ttl(
            "long_lived".to_string(),
            "value".to_string(),
            Duration::from_secs(3600),
        );
        cache.put("forever".to_string(), "value".to_string());

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"long_lived".to_string()), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(shared_cache(), Duration::from_millis(50));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
