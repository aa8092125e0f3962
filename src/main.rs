//! Evict Cache - demonstration driver
//!
//! Walks through each eviction policy, TTL expiration and concurrent access,
//! then prints the final statistics as JSON.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use evict_cache::{spawn_cleanup_task, Cache, Config, PolicyKind, TtlCache};

/// Main entry point for the demonstration.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the LRU, FIFO and LFU scenarios
/// 4. Run the TTL scenario with the background cleanup task
/// 5. Hammer a shared cache from several threads
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evict_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}, default_ttl_ms={}, cleanup_interval_ms={}",
        config.capacity, config.policy, config.default_ttl_ms, config.cleanup_interval_ms
    );

    lru_demo()?;
    fifo_demo()?;
    lfu_demo()?;
    ttl_demo(&config).await?;
    concurrency_demo(&config)?;

    Ok(())
}

fn lru_demo() -> anyhow::Result<()> {
    let cache = Cache::with_policy(3, PolicyKind::Lru)?;

    cache.put("user:1", "Alice");
    cache.put("user:2", "Bob");
    cache.put("user:3", "Charlie");
    cache.get(&"user:1");
    cache.get(&"user:2");
    cache.put("user:4", "Diana");

    info!(
        evicted = !cache.contains_key(&"user:3"),
        size = cache.len(),
        "LRU: user:3 was least recently used"
    );
    Ok(())
}

fn fifo_demo() -> anyhow::Result<()> {
    let cache = Cache::with_policy(3, PolicyKind::Fifo)?;

    for (key, value) in [(1, "First"), (2, "Second"), (3, "Third")] {
        cache.put(key, value);
    }
    for _ in 0..5 {
        cache.get(&1);
    }
    cache.put(4, "Fourth");

    info!(
        keys = ?cache.keys(),
        "FIFO: entry 1 evicted despite frequent access"
    );
    Ok(())
}

fn lfu_demo() -> anyhow::Result<()> {
    let cache = Cache::with_policy(3, PolicyKind::Lfu)?;

    cache.put("popular", 1);
    cache.put("medium", 2);
    cache.put("rare", 3);
    for _ in 0..10 {
        cache.get(&"popular");
    }
    for _ in 0..3 {
        cache.get(&"medium");
    }
    cache.put("newcomer", 4);

    info!(
        keys = ?cache.keys(),
        "LFU: 'rare' had the lowest access count"
    );
    Ok(())
}

async fn ttl_demo(config: &Config) -> anyhow::Result<()> {
    let cache: Arc<TtlCache<String, String>> = Arc::new(
        config
            .build_ttl_cache()
            .context("Failed to build TTL cache from configuration")?,
    );
    let cleanup_handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval());

    cache.put_with_ttl("session".into(), "token".into(), Duration::from_millis(200));
    cache.put_with_ttl("profile".into(), "data".into(), Duration::from_secs(60));
    cache.get(&"session".to_string());

    tokio::time::sleep(Duration::from_millis(300)).await;

    info!(
        size = cache.len(),
        valid = cache.count_valid(),
        session_ttl_ms = cache.remaining_ttl(&"session".to_string()).as_millis() as u64,
        "TTL: session expired"
    );

    cache.get(&"session".to_string());
    cache.cleanup_expired();
    cleanup_handle.abort();

    println!("{}", serde_json::to_string_pretty(&cache.stats())?);
    Ok(())
}

fn concurrency_demo(config: &Config) -> anyhow::Result<()> {
    let capacity = config.capacity.clamp(1, 100);
    let cache = Cache::with_policy(capacity, config.policy)?;

    std::thread::scope(|scope| {
        for t in 0..4usize {
            let cache = &cache;
            scope.spawn(move || {
                for i in 0..100usize {
                    cache.put(t * 1000 + i, i);
                    cache.get(&(t * 1000 + i / 2));
                }
            });
        }
    });

    info!(
        size = cache.len(),
        capacity = cache.capacity(),
        strategy = cache.strategy_name(),
        "Concurrency: 4 threads x 100 puts"
    );
    Ok(())
}
