//! Background worker draining the click-event channel.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkStore;

/// Processes click events until the channel closes.
///
/// Each event turns into a single atomic `clicks = clicks + 1` in the
/// store. Failures are logged and dropped; click counting is best-effort
/// telemetry and must never surface to a user-visible path.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, store: Arc<dyn LinkStore>) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = store.increment_clicks(event.link_id).await {
            tracing::warn!(link_id = event.link_id, error = %e, "failed to record click");
        }
    }

    tracing::debug!("click worker channel closed, shutting down");
}
