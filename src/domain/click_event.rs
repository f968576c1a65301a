//! Click event passed from resolution handlers to the background worker.

/// A single click awaiting its durable counter increment.
///
/// Handlers push these onto a bounded channel instead of writing to the
/// store inline, so the redirect/text response never waits on the counter
/// update and the increment completes even when the originating request is
/// aborted mid-flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: i64,
}

impl ClickEvent {
    pub fn new(link_id: i64) -> Self {
        Self { link_id }
    }
}
