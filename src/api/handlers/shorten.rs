//! Handler for the shorten endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link from a URL or a piece of text.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "content": "https://example.com/some/long/path",
///   "slug": "my-link",   // optional
///   "useAI": true        // optional, defaults to false
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "https://sb.example/my-link",
///   "slug": "my-link",
///   "isAI": false
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for empty content, an unusable custom slug, or a
/// slug that is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let created = state
        .link_service
        .create_link(&payload.content, payload.slug.as_deref(), payload.use_ai)
        .await?;

    let short_url = state.link_service.short_url(&created.link.slug);

    Ok(Json(ShortenResponse {
        short_url,
        slug: created.link.slug,
        is_ai: created.is_ai,
    }))
}
