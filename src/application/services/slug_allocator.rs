//! Slug allocation with tiered collision handling.

use std::sync::Arc;

use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::infrastructure::ai::SlugSuggester;
use crate::utils::slug::{
    generate_random, sanitize_slug, sanitize_user_slug, DEFAULT_RANDOM_LENGTH,
    FALLBACK_RANDOM_LENGTH, MAX_SLUG_LENGTH, MIN_SLUG_LENGTH,
};

/// Numeric-suffix retries for content-derived candidates.
const MAX_SUFFIX_ATTEMPTS: u32 = 10;

/// Verified attempts for random slugs before giving up.
const MAX_RANDOM_ATTEMPTS: u32 = 5;

/// Outcome of a slug allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedSlug {
    pub slug: String,
    /// True when the slug came from the content-understanding collaborator
    /// (possibly with a numeric suffix), false for user-chosen and random
    /// slugs.
    pub is_ai: bool,
}

/// Produces a slug guaranteed unique in the store at the moment of insert.
///
/// Collision handling is tiered by candidate quality: user slugs fail fast
/// (the user picks another), content-derived candidates get numeric-suffix
/// retries (similar content collides often), and random slugs at 6+
/// alphanumeric characters collide rarely enough that the plain path skips
/// the existence check unless `verify_random` is set.
pub struct SlugAllocator {
    store: Arc<dyn LinkStore>,
    suggester: Option<Arc<dyn SlugSuggester>>,
    verify_random: bool,
}

impl SlugAllocator {
    pub fn new(
        store: Arc<dyn LinkStore>,
        suggester: Option<Arc<dyn SlugSuggester>>,
        verify_random: bool,
    ) -> Self {
        Self {
            store,
            suggester,
            verify_random,
        }
    }

    /// Allocates a slug for the given creation request.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when a supplied custom slug sanitizes to
    ///   nothing usable
    /// - [`AppError::Conflict`] when a supplied custom slug is taken
    /// - [`AppError::StoreUnavailable`] when existence checks fail
    /// - [`AppError::Internal`] when every random attempt collides
    pub async fn allocate(
        &self,
        content: &str,
        is_text: bool,
        custom_slug: Option<&str>,
        use_ai: bool,
    ) -> Result<AllocatedSlug, AppError> {
        if let Some(raw) = custom_slug {
            return self.allocate_custom(raw).await;
        }

        if use_ai {
            return self.allocate_from_content(content, is_text).await;
        }

        self.allocate_random().await
    }

    /// User-supplied slug: sanitize, then fail fast on conflict.
    async fn allocate_custom(&self, raw: &str) -> Result<AllocatedSlug, AppError> {
        let slug = sanitize_user_slug(raw)?;

        if self.store.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict("Slug already exists, try another one"));
        }

        Ok(AllocatedSlug { slug, is_ai: false })
    }

    /// Content-derived slug with numeric-suffix retries.
    async fn allocate_from_content(
        &self,
        content: &str,
        is_text: bool,
    ) -> Result<AllocatedSlug, AppError> {
        let candidate = match &self.suggester {
            Some(suggester) => match suggester.suggest(content, is_text).await {
                Ok(raw) => {
                    let cleaned = sanitize_slug(&raw);
                    if cleaned.len() >= MIN_SLUG_LENGTH {
                        Some(cleaned)
                    } else {
                        tracing::warn!(
                            suggestion = %raw,
                            "suggested slug unusable after sanitization, falling back to random"
                        );
                        None
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "slug suggestion failed, falling back to random");
                    None
                }
            },
            None => None,
        };

        let Some(base) = candidate else {
            let slug = self.verified_random(FALLBACK_RANDOM_LENGTH).await?;
            return Ok(AllocatedSlug { slug, is_ai: false });
        };

        if self.store.find_by_slug(&base).await?.is_none() {
            return Ok(AllocatedSlug {
                slug: base,
                is_ai: true,
            });
        }

        for attempt in 1..=MAX_SUFFIX_ATTEMPTS {
            let suffix = format!("-{attempt}");
            let keep = MAX_SLUG_LENGTH - suffix.len();
            let mut slug: String = base.chars().take(keep).collect();
            while slug.ends_with('-') {
                slug.pop();
            }
            slug.push_str(&suffix);

            if self.store.find_by_slug(&slug).await?.is_none() {
                return Ok(AllocatedSlug { slug, is_ai: true });
            }
        }

        tracing::warn!(base = %base, "all suffixed candidates taken, falling back to random");
        let slug = self.verified_random(FALLBACK_RANDOM_LENGTH).await?;
        Ok(AllocatedSlug { slug, is_ai: false })
    }

    /// Plain random path. Skips the existence check by default; random
    /// 6-character slugs collide astronomically rarely and the unique
    /// constraint still backstops the narrow double-insert race.
    async fn allocate_random(&self) -> Result<AllocatedSlug, AppError> {
        let slug = if self.verify_random {
            self.verified_random(DEFAULT_RANDOM_LENGTH).await?
        } else {
            generate_random(DEFAULT_RANDOM_LENGTH)
        };

        Ok(AllocatedSlug { slug, is_ai: false })
    }

    /// Random slug that has been checked against the store.
    async fn verified_random(&self, len: usize) -> Result<String, AppError> {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let slug = generate_random(len);
            if self.store.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }

        Err(AppError::internal("Failed to generate a unique slug"))
    }
}
