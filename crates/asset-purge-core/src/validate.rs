//! Identifier validation applied before any remote call.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").ok());

/// Returns `true` when the identifier is non-empty and made only of ASCII
/// letters, digits, `.`, `_` and `-`.
#[must_use]
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(identifier))
}
