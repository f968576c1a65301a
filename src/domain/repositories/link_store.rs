//! Store trait for durable link persistence.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable persistence contract for link records.
///
/// The store owns the authoritative record lifecycle: it assigns `id` and
/// `created_at` on insert and enforces slug uniqueness. Any operation may
/// fail with [`AppError::StoreUnavailable`]; callers decide whether that is
/// fatal to the request (lookups, inserts) or swallowed (click increments).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-memory,
///   used by tests and storeless development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks up a link by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new record, assigning `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the slug is already taken.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Atomically increments the click counter for a record.
    async fn increment_clicks(&self, id: i64) -> Result<(), AppError>;

    /// Deletes a record by id, returning the deleted record when it existed.
    ///
    /// The returned record carries the slug the caller needs for paired
    /// cache invalidation.
    async fn delete_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Lists all records, newest first.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Checks store connectivity. Used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
