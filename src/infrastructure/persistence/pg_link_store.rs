//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Database row shape for the `links` table.
#[derive(FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    target: String,
    is_text: bool,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.slug,
            row.target,
            row.is_text,
            row.clicks,
            row.created_at,
        )
    }
}

/// PostgreSQL store for link records.
///
/// Slug uniqueness is enforced by the table's unique constraint; a
/// violation surfaces as [`AppError::Conflict`] via the shared sqlx error
/// mapping. Click increments are a single atomic `UPDATE`, which is the
/// only serialization the counter needs.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, slug, target, is_text, clicks, created_at \
             FROM links WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "INSERT INTO links (slug, target, is_text) VALUES ($1, $2, $3) \
             RETURNING id, slug, target, is_text, clicks, created_at",
        )
        .bind(&new_link.slug)
        .bind(&new_link.target)
        .bind(new_link.is_text)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "DELETE FROM links WHERE id = $1 \
             RETURNING id, slug, target, is_text, clicks, created_at",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT id, slug, target, is_text, clicks, created_at \
             FROM links ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
