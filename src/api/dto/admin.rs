//! DTOs for the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Admin login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Admin login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Admin delete response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Full link record as returned by the admin listing.
#[derive(Debug, Serialize)]
pub struct AdminLinkResponse {
    pub id: i64,
    pub slug: String,
    pub target: String,
    pub is_text: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

impl AdminLinkResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            target: link.target,
            is_text: link.is_text,
            clicks: link.clicks,
            created_at: link.created_at,
            short_url,
        }
    }
}
