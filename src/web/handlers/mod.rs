//! HTML template rendering handlers.

mod admin;
mod index;

pub use admin::{dashboard_handler, login_page_handler};
pub use index::index_handler;
