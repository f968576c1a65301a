//! In-process TTL cache for link records.

use super::service::LinkCache;
use crate::domain::entities::Link;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// A cached link snapshot plus its insertion time.
#[derive(Debug, Clone)]
struct CacheEntry {
    link: Link,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_stale(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

/// In-memory cache with a constructor-configured TTL.
///
/// Entries are independent, so one RwLock around the map is enough; no
/// cross-slug ordering is required. The map is unbounded by design and
/// bounded in practice by the set of distinct slugs accessed within one TTL
/// window plus the periodic sweep.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Current entry count, stale entries included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LinkCache for MemoryCache {
    async fn get(&self, slug: &str) -> Option<Link> {
        {
            let entries = self.entries.read().await;
            match entries.get(slug) {
                Some(entry) if !entry.is_stale(self.ttl) => return Some(entry.link.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Stale entry: evict lazily. Re-check under the write lock in case
        // a concurrent set refreshed it meanwhile.
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(slug) {
            if entry.is_stale(self.ttl) {
                entries.remove(slug);
            } else {
                return Some(entry.link.clone());
            }
        }
        None
    }

    async fn set(&self, slug: &str, link: Link) {
        let entry = CacheEntry {
            link,
            inserted_at: Instant::now(),
        };
        self.entries.write().await.insert(slug.to_string(), entry);
    }

    async fn delete(&self, slug: &str) {
        self.entries.write().await.remove(slug);
    }

    async fn sweep(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_stale(self.ttl));
        before - entries.len()
    }

    async fn health_check(&self) -> bool {
        true
    }
}
