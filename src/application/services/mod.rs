pub mod auth_service;
pub mod link_service;
pub mod slug_allocator;

pub use auth_service::AuthService;
pub use link_service::{CreatedLink, LinkService};
pub use slug_allocator::{AllocatedSlug, SlugAllocator};
