//! Slug derivation for project titles.
//!
//! [`generate_slug`] turns a free-text title into a URL-safe identifier and
//! [`make_unique`] disambiguates it against slugs already in use.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\s-]").expect("non-slug pattern is valid"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

/// Lowercase, trim, drop everything except ASCII word characters, whitespace
/// and hyphens, then turn whitespace runs and hyphen runs into single hyphens.
///
/// Each step applies to the whole string in that order. Underscores survive,
/// and a hyphen left at either end by removed punctuation is kept
/// (`"hello !"` becomes `"hello-"`). Empty input yields an empty string.
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&kept, "-");
    HYPHEN_RUNS.replace_all(&hyphenated, "-").into_owned()
}

/// Return `base` if unused, otherwise the first of `base-1`, `base-2`, ...
/// that is absent from `taken`.
///
/// The counter is unbounded; termination follows from `taken` being finite.
pub fn make_unique(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }

    let mut counter = 1u64;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Whether `value` only uses the slug alphabet (`[a-z0-9_-]`) and carries at
/// least one word character.
///
/// Doubled hyphens are allowed: a base ending in `-` gains `--1` from
/// [`make_unique`].
pub fn is_canonical_slug(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}
