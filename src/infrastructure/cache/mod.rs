//! Caching layer for fast slug resolution.
//!
//! Provides a [`LinkCache`] trait with two implementations:
//! - [`MemoryCache`] - in-process TTL map, the production default
//! - [`NullCache`] - no-op implementation for disabled caching
//!
//! plus [`run_cache_sweeper`], the periodic eviction task the server owns.

mod memory_cache;
mod null_cache;
mod service;
mod sweeper;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::LinkCache;
pub use sweeper::run_cache_sweeper;
