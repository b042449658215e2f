//! Thread-local cache of compiled, anchored regex patterns
//!
//! Pattern tables are typically built once per language but the same pattern
//! sources recur across tables (whitespace, string and number shapes), so
//! compiled regexes are cached. Thread-local storage keeps the cache off the
//! classification hot path without locking.
//!
//! All cached regexes are anchored: a source of `^abc` or `abc` compiles to
//! `^(?:abc)`, so a match always starts at position 0 of the suffix handed to
//! it and never scans ahead.

use crate::error::Error;
use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

thread_local! {
    /// Thread-local cache of compiled regex patterns, keyed by source
    static REGEX_CACHE: RefCell<HashMap<String, Regex>> = RefCell::new(HashMap::new());
}

/// Get or compile an anchored regex for a pattern source.
///
/// A leading `^` in `source` is accepted and redundant; the compiled form is
/// always `^(?:...)`.
///
/// # Errors
/// [`Error::InvalidPattern`] if the regex crate rejects the source.
pub fn compile_anchored(source: &str) -> Result<Regex, Error> {
    REGEX_CACHE.with(|cache| {
        if let Some(regex) = cache.borrow().get(source) {
            return Ok(regex.clone());
        }

        let body = source.strip_prefix('^').unwrap_or(source);
        let regex = Regex::new(&format!("^(?:{})", body)).map_err(|e| Error::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })?;

        cache
            .borrow_mut()
            .insert(source.to_string(), regex.clone());
        Ok(regex)
    })
}

/// Clear the regex cache.
///
/// Call this to free memory if many unique patterns have been compiled.
pub fn clear_cache() {
    REGEX_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Get the number of cached patterns.
pub fn cache_size() -> usize {
    REGEX_CACHE.with(|cache| cache.borrow().len())
}
