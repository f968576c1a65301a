//! Web layer for browser-based pages.
//!
//! Uses Askama templates for server-side rendering; the pages drive the JSON
//! API from client-side scripts.

pub mod handlers;
pub mod routes;
