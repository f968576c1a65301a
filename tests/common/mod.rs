#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use snipbin::application::services::{AuthService, LinkService, SlugAllocator};
use snipbin::domain::click_event::ClickEvent;
use snipbin::domain::entities::{Link, NewLink};
use snipbin::domain::repositories::LinkStore;
use snipbin::infrastructure::cache::MemoryCache;
use snipbin::infrastructure::persistence::MemoryLinkStore;
use snipbin::state::AppState;

pub const TEST_BASE_URL: &str = "https://sb.example";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Builds an app state over an in-memory store and cache.
///
/// Returns the store handle for seeding and the click receiver for
/// asserting on click events.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let cache = Arc::new(MemoryCache::new(Duration::from_secs(60)));
    let (tx, rx) = mpsc::channel(100);

    let allocator = SlugAllocator::new(store.clone(), None, false);
    let link_service = Arc::new(LinkService::new(
        store.clone(),
        cache.clone(),
        allocator,
        TEST_BASE_URL.to_string(),
    ));
    let auth_service = Arc::new(AuthService::new(TEST_ADMIN_PASSWORD));

    let state = AppState {
        link_service,
        auth_service,
        cache,
        click_tx: tx,
    };

    (state, rx, store)
}

pub async fn create_test_link(
    store: &MemoryLinkStore,
    slug: &str,
    target: &str,
    is_text: bool,
) -> Link {
    store
        .insert(NewLink {
            slug: slug.to_string(),
            target: target.to_string(),
            is_text,
        })
        .await
        .unwrap()
}
