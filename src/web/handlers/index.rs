//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html`: the shorten form with custom-slug and
/// AI-suggestion options, submitting to `POST /api/shorten`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}
