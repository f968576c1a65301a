//! Handler for short link resolution.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::text_format::{escape_html, preview_text, render_text};

/// Query parameters for the resolve endpoint.
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    preview: Option<String>,
}

impl RedirectQuery {
    fn is_preview(&self) -> bool {
        matches!(self.preview.as_deref(), Some("1") | Some("true"))
    }
}

/// Page shown for text links, full or preview.
#[derive(Template, WebTemplate)]
#[template(path = "text_view.html")]
struct TextViewTemplate {
    slug: String,
    /// Pre-rendered, already-escaped HTML fragment.
    body: String,
    preview: bool,
}

/// Resolves a slug to either a redirect or a text page.
///
/// # Endpoint
///
/// `GET /{slug}` with optional `?preview=1`
///
/// # Request Flow
///
/// 1. Resolve the slug through the cache (miss falls back to the store and
///    populates the cache)
/// 2. Send a click event to the background worker; a full queue drops the
///    event rather than delaying the response
/// 3. URL links get a 302 to their target; text links get an HTML page,
///    truncated when preview mode is requested
///
/// Preview mode does not bypass click counting.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    Query(query): Query<RedirectQuery>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&slug).await?;

    if let Err(e) = state.click_tx.try_send(ClickEvent::new(link.id)) {
        match e {
            TrySendError::Full(_) => {
                tracing::warn!(link_id = link.id, "Click queue full, dropping event");
            }
            TrySendError::Closed(_) => {
                tracing::warn!(link_id = link.id, "Click worker gone, dropping event");
            }
        }
    }

    if !link.is_text {
        // axum's Redirect only covers 303/307/308; build the 302 directly.
        return Ok((StatusCode::FOUND, [(header::LOCATION, link.target)]).into_response());
    }

    let preview = query.is_preview();
    let body = if preview {
        format!("<p>{}</p>", escape_html(&preview_text(&link.target)))
    } else {
        render_text(&link.target)
    };

    Ok(TextViewTemplate {
        slug,
        body,
        preview,
    }
    .into_response())
}
