//! External slug-suggestion collaborator.
//!
//! [`SlugSuggester`] is the seam; [`HttpSlugSuggester`] talks to a
//! configured text-generation endpoint. When no endpoint is configured the
//! allocator simply runs without a suggester and AI-path requests fall back
//! to random slugs.

mod http_suggester;
mod suggester;

pub use http_suggester::HttpSlugSuggester;
pub use suggester::{SlugSuggester, SuggestError};

#[cfg(test)]
pub use suggester::MockSlugSuggester;
