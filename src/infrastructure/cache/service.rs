//! Cache trait for link record snapshots.

use crate::domain::entities::Link;
use async_trait::async_trait;

/// Process-local, time-boxed read-through cache mapping slug to link record.
///
/// The cache holds snapshots only: a cached record's `clicks` value lags the
/// store's authoritative counter and is never written back. Deleting a
/// record from the store must be paired with [`LinkCache::delete`] so a
/// deleted slug cannot be served from a stale entry for up to one TTL.
///
/// Implementations must tolerate concurrent access from many in-flight
/// resolutions. Racing `set` calls for the same slug may land in either
/// order; both are valid store snapshots.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process TTL map
/// - [`crate::infrastructure::cache::NullCache`] - no-op, caching disabled
#[async_trait]
pub trait LinkCache: Send + Sync {
    /// Returns the cached record if present and fresh.
    ///
    /// A stale entry is treated as absent and evicted as a side effect.
    async fn get(&self, slug: &str) -> Option<Link>;

    /// Stores a snapshot, unconditionally overwriting any existing entry
    /// with a fresh timestamp.
    async fn set(&self, slug: &str, link: Link);

    /// Removes the entry if present; no-op otherwise.
    async fn delete(&self, slug: &str);

    /// Evicts every entry aged at least one TTL, returning the eviction
    /// count. Run periodically to bound memory growth from long-tail slugs
    /// that never get re-accessed.
    async fn sweep(&self) -> usize;

    /// Reports whether the cache backend is usable. Trivially true for
    /// in-process implementations; kept on the trait for the health check.
    async fn health_check(&self) -> bool;
}
