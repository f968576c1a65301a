//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// `content` is either a URL (becomes a redirect) or arbitrary text (stored
/// and served as a text page). Classification happens server-side.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// URL or text to shorten.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    /// Optional custom slug. Sanitized server-side; a conflict is an error
    /// rather than a retry.
    pub slug: Option<String>,

    /// When true, asks the configured model for a content-derived slug.
    #[serde(default, rename = "useAI")]
    pub use_ai: bool,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub slug: String,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
}
