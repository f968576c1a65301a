//! In-memory implementation of the link store.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Link>,
}

/// Mutex-guarded in-memory store.
///
/// Behaves like the Postgres store from the caller's perspective: ids are
/// assigned monotonically, slug uniqueness yields [`AppError::Conflict`],
/// and `list_all` returns newest first. Backs the integration tests and
/// works as a storeless development backend; nothing survives a restart.
pub struct MemoryLinkStore {
    inner: Mutex<Inner>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }
}

impl Default for MemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.rows.iter().find(|l| l.slug == slug).cloned())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        if inner.rows.iter().any(|l| l.slug == new_link.slug) {
            return Err(AppError::conflict("Slug already exists, try another one"));
        }

        inner.next_id += 1;
        let link = Link::new(
            inner.next_id,
            new_link.slug,
            new_link.target,
            new_link.is_text,
            0,
            Utc::now(),
        );
        inner.rows.push(link.clone());
        Ok(link)
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        if let Some(link) = inner.rows.iter_mut().find(|l| l.id == id) {
            link.clicks += 1;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let pos = inner.rows.iter().position(|l| l.id == id);
        Ok(pos.map(|i| inner.rows.remove(i)))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(slug: &str, target: &str, is_text: bool) -> NewLink {
        NewLink {
            slug: slug.to_string(),
            target: target.to_string(),
            is_text,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_defaults() {
        let store = MemoryLinkStore::new();

        let link = store
            .insert(new_link("abc", "https://example.com", false))
            .await
            .unwrap();

        assert_eq!(link.id, 1);
        assert_eq!(link.clicks, 0);
        assert!(!link.is_text);
    }

    #[tokio::test]
    async fn test_insert_duplicate_slug_conflicts() {
        let store = MemoryLinkStore::new();
        store
            .insert(new_link("abc", "https://one.com", false))
            .await
            .unwrap();

        let err = store
            .insert(new_link("abc", "https://two.com", false))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_by_slug() {
        let store = MemoryLinkStore::new();
        store
            .insert(new_link("note", "hello world", true))
            .await
            .unwrap();

        let found = store.find_by_slug("note").await.unwrap().unwrap();
        assert!(found.is_text);
        assert_eq!(found.target, "hello world");

        assert!(store.find_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_clicks_is_monotonic() {
        let store = MemoryLinkStore::new();
        let link = store
            .insert(new_link("abc", "https://example.com", false))
            .await
            .unwrap();

        let mut last = 0;
        for _ in 0..5 {
            store.increment_clicks(link.id).await.unwrap();
            let clicks = store.find_by_slug("abc").await.unwrap().unwrap().clicks;
            assert!(clicks >= last);
            last = clicks;
        }
        assert_eq!(last, 5);
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_record() {
        let store = MemoryLinkStore::new();
        let link = store
            .insert(new_link("abc", "https://example.com", false))
            .await
            .unwrap();

        let deleted = store.delete_by_id(link.id).await.unwrap().unwrap();
        assert_eq!(deleted.slug, "abc");

        assert!(store.find_by_slug("abc").await.unwrap().is_none());
        assert!(store.delete_by_id(link.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = MemoryLinkStore::new();
        store
            .insert(new_link("first", "https://a.com", false))
            .await
            .unwrap();
        store
            .insert(new_link("second", "https://b.com", false))
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Same-timestamp inserts fall back to id ordering.
        assert_eq!(all[0].slug, "second");
        assert_eq!(all[1].slug, "first");
    }
}
