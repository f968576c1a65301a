//! Slug generation and normalization utilities.
//!
//! Random slugs draw uniformly from the 62-symbol alphanumeric alphabet.
//! Collision handling lives in the allocator, not here, so a plain
//! non-cryptographic RNG is sufficient.

use crate::error::AppError;
use rand::distr::Alphanumeric;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Default length for random slugs on the plain-random path.
pub const DEFAULT_RANDOM_LENGTH: usize = 6;

/// Extended length for the random fallback after AI-path collisions.
pub const FALLBACK_RANDOM_LENGTH: usize = 8;

/// Maximum slug length after normalization.
pub const MAX_SLUG_LENGTH: usize = 30;

/// Minimum slug length after normalization.
pub const MIN_SLUG_LENGTH: usize = 2;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9 _-]").unwrap());
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());

/// Generates a random slug of `len` alphanumeric characters.
///
/// The alphabet is `[A-Za-z0-9]`, sampled uniformly.
pub fn generate_random(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Normalizes a slug candidate to the `[a-z0-9_-]` charset.
///
/// Lowercases, drops everything outside `[a-z0-9 _-]`, collapses
/// whitespace/hyphen runs into single hyphens, trims leading and trailing
/// hyphens, and truncates to [`MAX_SLUG_LENGTH`]. The result may be empty.
///
/// Applying this twice yields the same output as applying it once.
pub fn sanitize_slug(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let joined = SEPARATOR_RUN.replace_all(&cleaned, "-");
    let trimmed = joined.trim_matches('-');

    let mut slug: String = trimmed.chars().take(MAX_SLUG_LENGTH).collect();
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Normalizes a user-supplied custom slug, rejecting unusable input.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the cleaned slug is shorter than
/// [`MIN_SLUG_LENGTH`] characters.
pub fn sanitize_user_slug(raw: &str) -> Result<String, AppError> {
    let slug = sanitize_slug(raw);
    if slug.len() < MIN_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Custom slug must contain at least 2 usable characters (a-z, 0-9, hyphen, underscore)",
        ));
    }
    Ok(slug)
}
