//! Web page route configuration.

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, index_handler, login_page_handler};

/// Page routes.
///
/// # Endpoints
///
/// - `GET /`                - Landing page with the shorten form
/// - `GET /admin`           - Admin login page
/// - `GET /admin/dashboard` - Admin dashboard
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/admin", get(login_page_handler))
        .route("/admin/dashboard", get(dashboard_handler))
}
