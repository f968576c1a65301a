//! Link entity representing a stored short link or text snippet.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short link record.
///
/// `target` is either an absolute URL (redirect destination) or free-form
/// text, disambiguated by `is_text`. The pairing is fixed at creation;
/// records are only ever created and deleted, never updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub target: String,
    pub is_text: bool,
    /// Click counter, mutated only by the resolution path. Cached copies of
    /// this value are snapshots; the store's counter is authoritative.
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(
        id: i64,
        slug: String,
        target: String,
        is_text: bool,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            target,
            is_text,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub target: String,
    pub is_text: bool,
}
