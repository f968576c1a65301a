//! No-op cache implementation for disabled caching.

use super::service::LinkCache;
use crate::domain::entities::Link;
use async_trait::async_trait;
use tracing::debug;

/// A cache that stores nothing.
///
/// Every lookup misses, so all resolutions fall through to the store. Used
/// in tests that must observe store traffic and when caching is disabled.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkCache for NullCache {
    async fn get(&self, _slug: &str) -> Option<Link> {
        None
    }

    async fn set(&self, _slug: &str, _link: Link) {}

    async fn delete(&self, _slug: &str) {}

    async fn sweep(&self) -> usize {
        0
    }

    async fn health_check(&self) -> bool {
        true
    }
}
