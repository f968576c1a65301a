use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::cache::LinkCache;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub cache: Arc<dyn LinkCache>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}
