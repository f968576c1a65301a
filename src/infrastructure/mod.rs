//! Infrastructure layer: storage backends, caching, and external services.

pub mod ai;
pub mod cache;
pub mod persistence;
