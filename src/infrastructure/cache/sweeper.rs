//! Periodic cache sweep task.

use super::service::LinkCache;
use std::sync::Arc;
use std::time::Duration;

/// Runs `cache.sweep()` on a fixed interval, forever.
///
/// Lazy eviction only fires when a stale slug is re-accessed; this task is
/// what bounds memory for slugs that never come back. Spawned by the server
/// at startup, so the cache itself stays an injectable object with no
/// background machinery of its own.
pub async fn run_cache_sweeper(cache: Arc<dyn LinkCache>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick fires immediately; skip it so startup stays quiet.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let evicted = cache.sweep().await;
        if evicted > 0 {
            tracing::debug!(evicted, "cache sweep evicted stale entries");
        }
    }
}
