//! API route configuration.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::api::handlers::{admin, shorten_handler};
use crate::state::AppState;

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Admin API routes.
///
/// `/login` verifies the configured password for the dashboard page flow;
/// the list and delete endpoints carry no further authentication.
///
/// # Endpoints
///
/// - `POST /login`        - Verify the admin password
/// - `GET  /links`        - List all links
/// - `DELETE /links/{id}` - Delete a link and invalidate its cache entry
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login_handler))
        .route("/links", get(admin::links_handler))
        .route("/links/{id}", delete(admin::delete_link_handler))
}
