//! External content-understanding collaborator for slug suggestions.

use async_trait::async_trait;

/// Errors from the external suggestion service.
///
/// These never reach API callers: the allocator recovers from every variant
/// by falling back to random generation.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("suggestion request failed: {0}")]
    Request(String),

    #[error("suggestion request timed out")]
    Timeout,

    #[error("suggestion response was unusable: {0}")]
    BadResponse(String),
}

/// Proposes a semantically meaningful slug for some content.
///
/// Implementors return the raw suggestion; sanitization and uniqueness are
/// the allocator's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlugSuggester: Send + Sync {
    async fn suggest(&self, content: &str, is_text: bool) -> Result<String, SuggestError>;
}
