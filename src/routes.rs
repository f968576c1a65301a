//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`      - Short link resolution (redirect or text page)
//! - `GET  /health`      - Health check: DB, cache, click queue
//! - `GET  /`            - Landing page
//! - `/api/*`            - Shorten API
//! - `/admin`, `/admin/dashboard` - Admin pages
//! - `/admin/api/*`      - Admin JSON API
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .nest("/admin/api", api::routes::admin_routes())
        .nest_service("/static", ServeDir::new("static"))
        // Fixed paths take precedence over the slug capture.
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
