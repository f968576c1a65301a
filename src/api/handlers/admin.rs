//! Handlers for the admin API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::admin::{AdminLinkResponse, DeleteResponse, LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies the admin password.
///
/// # Endpoint
///
/// `POST /admin/api/login` with `{"password": "..."}`
///
/// # Errors
///
/// Returns 401 Unauthorized on a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    state.auth_service.verify(&payload.password)?;

    Ok(Json(LoginResponse { success: true }))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /admin/api/links`
pub async fn links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminLinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.slug);
            AdminLinkResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Deletes a link by id.
///
/// # Endpoint
///
/// `DELETE /admin/api/links/{id}`
///
/// # Cache
///
/// The cache entry for the removed slug is invalidated in the same call, so
/// a deleted link stops resolving immediately rather than after TTL expiry.
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(id).await?;

    Ok(Json(DeleteResponse { success: true }))
}
