//! Admin page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the admin login page.
///
/// Renders `templates/admin_login.html`. The page script posts the password
/// to `/admin/api/login` and redirects to the dashboard on success.
#[derive(Template, WebTemplate)]
#[template(path = "admin_login.html")]
struct AdminLoginTemplate {}

/// Template for the admin dashboard.
///
/// Renders `templates/admin_dashboard.html` with the link table and summary
/// stats, populated client-side from `/admin/api/links`.
#[derive(Template, WebTemplate)]
#[template(path = "admin_dashboard.html")]
struct AdminDashboardTemplate {}

/// Renders the admin login page.
///
/// # Endpoint
///
/// `GET /admin`
pub async fn login_page_handler() -> impl IntoResponse {
    AdminLoginTemplate {}
}

/// Renders the admin dashboard.
///
/// # Endpoint
///
/// `GET /admin/dashboard`
pub async fn dashboard_handler() -> impl IntoResponse {
    AdminDashboardTemplate {}
}
