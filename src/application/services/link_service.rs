//! Link creation, resolution, and administration service.

use std::sync::Arc;

use url::Url;

use crate::application::services::slug_allocator::SlugAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::infrastructure::cache::LinkCache;

/// Result of creating a link, including whether the slug came from the
/// content-understanding collaborator.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub is_ai: bool,
}

/// Service for creating, resolving, and deleting short links.
///
/// Resolution reads through the cache: a miss falls back to the store and
/// populates the cache on the way out, so repeat lookups for hot slugs skip
/// the database entirely until the entry goes stale.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    cache: Arc<dyn LinkCache>,
    allocator: SlugAllocator,
    base_url: String,
}

impl LinkService {
    pub fn new(
        store: Arc<dyn LinkStore>,
        cache: Arc<dyn LinkCache>,
        allocator: SlugAllocator,
        base_url: String,
    ) -> Self {
        Self {
            store,
            cache,
            allocator,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link for the given content.
    ///
    /// Content is classified once at creation: anything that parses as an
    /// absolute `http` or `https` URL becomes a redirect, everything else is
    /// stored as text. The classification never changes afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty content or an unusable
    /// custom slug, and [`AppError::Conflict`] when the custom slug is taken.
    pub async fn create_link(
        &self,
        content: &str,
        custom_slug: Option<&str>,
        use_ai: bool,
    ) -> Result<CreatedLink, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::bad_request("Content is required"));
        }

        let is_text = !is_redirect_target(content);

        let allocated = self
            .allocator
            .allocate(content, is_text, custom_slug, use_ai)
            .await?;

        let link = self
            .store
            .insert(NewLink {
                slug: allocated.slug,
                target: content.to_string(),
                is_text,
            })
            .await?;

        tracing::info!(slug = %link.slug, is_text, "link created");

        Ok(CreatedLink {
            link,
            is_ai: allocated.is_ai,
        })
    }

    /// Resolves a slug to its link, reading through the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link exists for the slug.
    pub async fn resolve(&self, slug: &str) -> Result<Link, AppError> {
        if let Some(link) = self.cache.get(slug).await {
            tracing::debug!(slug, "cache hit");
            return Ok(link);
        }

        let link = self
            .store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        self.cache.set(slug, link.clone()).await;

        Ok(link)
    }

    /// Deletes a link by id and invalidates its cache entry.
    ///
    /// The cache entry is keyed by slug, so the store delete has to surface
    /// the removed record for the invalidation to happen in the same call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id does not exist.
    pub async fn delete_link(&self, id: i64) -> Result<Link, AppError> {
        let link = self
            .store
            .delete_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        self.cache.delete(&link.slug).await;
        tracing::info!(id, slug = %link.slug, "link deleted");

        Ok(link)
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.store.list_all().await
    }

    /// Builds the public short URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    /// Checks connectivity to the backing store.
    pub async fn ping_store(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

/// A target is a redirect only when it parses as an absolute http(s) URL.
/// Other schemes (`javascript:`, `data:`, `ftp:`) are stored as text.
fn is_redirect_target(content: &str) -> bool {
    match Url::parse(content) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{MemoryCache, NullCache};
    use crate::infrastructure::persistence::MemoryLinkStore;
    use std::time::Duration;

    fn service_with(store: Arc<MemoryLinkStore>, cache: Arc<dyn LinkCache>) -> LinkService {
        let allocator = SlugAllocator::new(store.clone(), None, false);
        LinkService::new(store, cache, allocator, "https://sb.example".to_string())
    }

    fn memory_service() -> LinkService {
        service_with(Arc::new(MemoryLinkStore::new()), Arc::new(NullCache))
    }

    #[test]
    fn test_redirect_target_classification() {
        assert!(is_redirect_target("https://example.com"));
        assert!(is_redirect_target("http://example.com/path?q=1"));
        assert!(!is_redirect_target("just some text"));
        assert!(!is_redirect_target("example.com"));
        assert!(!is_redirect_target("javascript:alert(1)"));
        assert!(!is_redirect_target("ftp://example.com/file"));
        assert!(!is_redirect_target(""));
    }

    #[tokio::test]
    async fn test_create_link_classifies_url() {
        let service = memory_service();

        let created = service
            .create_link("https://example.com/page", None, false)
            .await
            .unwrap();

        assert!(!created.link.is_text);
        assert_eq!(created.link.target, "https://example.com/page");
        assert!(!created.is_ai);
    }

    #[tokio::test]
    async fn test_create_link_classifies_text() {
        let service = memory_service();

        let created = service
            .create_link("meeting notes for tuesday", None, false)
            .await
            .unwrap();

        assert!(created.link.is_text);
    }

    #[tokio::test]
    async fn test_create_link_trims_content() {
        let service = memory_service();

        let created = service
            .create_link("  https://example.com  ", None, false)
            .await
            .unwrap();

        assert_eq!(created.link.target, "https://example.com");
        assert!(!created.link.is_text);
    }

    #[tokio::test]
    async fn test_create_link_rejects_empty_content() {
        let service = memory_service();

        let err = service.create_link("   ", None, false).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_link_custom_slug() {
        let service = memory_service();

        let created = service
            .create_link("some text", Some("My Notes!"), false)
            .await
            .unwrap();

        assert_eq!(created.link.slug, "my-notes");
    }

    #[tokio::test]
    async fn test_resolve_populates_cache() {
        let store = Arc::new(MemoryLinkStore::new());
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
        let service = service_with(store, cache.clone());

        let created = service
            .create_link("https://example.com", None, false)
            .await
            .unwrap();
        let slug = created.link.slug.clone();

        assert!(cache.get(&slug).await.is_none());

        let resolved = service.resolve(&slug).await.unwrap();
        assert_eq!(resolved.id, created.link.id);
        assert!(cache.get(&slug).await.is_some());
    }

    #[tokio::test]
    async fn test_resolve_serves_from_cache() {
        let store = Arc::new(MemoryLinkStore::new());
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
        let service = service_with(store.clone(), cache);

        let created = service
            .create_link("https://example.com", None, false)
            .await
            .unwrap();
        let slug = created.link.slug.clone();

        service.resolve(&slug).await.unwrap();

        // Remove the row underneath; the cached snapshot still resolves.
        store.delete_by_id(created.link.id).await.unwrap();
        assert!(service.resolve(&slug).await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug() {
        let service = memory_service();

        let err = service.resolve("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_invalidates_cache() {
        let store = Arc::new(MemoryLinkStore::new());
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
        let service = service_with(store, cache.clone());

        let created = service
            .create_link("https://example.com", None, false)
            .await
            .unwrap();
        let slug = created.link.slug.clone();

        service.resolve(&slug).await.unwrap();
        assert!(cache.get(&slug).await.is_some());

        let deleted = service.delete_link(created.link.id).await.unwrap();
        assert_eq!(deleted.slug, slug);
        assert!(cache.get(&slug).await.is_none());
        assert!(service.resolve(&slug).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let service = memory_service();

        let err = service.delete_link(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_short_url_joins_base() {
        let service = memory_service();
        assert_eq!(service.short_url("abc123"), "https://sb.example/abc123");
    }
}
