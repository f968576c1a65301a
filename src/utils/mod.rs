//! Utility functions shared across the application.
//!
//! - [`slug`] - Random slug generation and normalization
//! - [`text_format`] - HTML escaping and light text formatting

pub mod slug;
pub mod text_format;
