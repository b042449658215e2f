//! Classifier: the core classification loop
//!
//! [`classify`] walks a text span under one [`PatternTable`] and produces an
//! ordered, gap-free sequence of classified spans. Dispatch discipline:
//! shortcut patterns first in declaration order, then fallthroughs in
//! declaration order; within a group the first non-empty match wins.
//!
//! Totality: when no pattern matches, one character is emitted as
//! [`StyleTag::Unrecognized`] and the walk continues, so every input,
//! malformed or binary-looking included, classifies completely. Every branch
//! advances the cursor by at least one character, which bounds total work by
//! `text.len() ×` patterns-attempted-per-position.
//!
//! The classifier is pure and synchronous: no I/O, no shared mutable state.
//! Any number of calls may run in parallel over shared tables.

use crate::error::Error;
use crate::pattern::Pattern;
use crate::style::StyleTag;
use crate::table::PatternTable;
use crate::token::Token;
use std::sync::Arc;

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

/// One classified span: a token plus the winning pattern's embed flag.
///
/// The embed flag is consumed by [`crate::composer::compose`]; callers that
/// skip composition can read the plain tokens directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'s> {
    /// The emitted token
    pub token: Token<'s>,
    /// Language whose rules should re-classify this span, if flagged
    pub embed: Option<Arc<str>>,
}

/// Classify `text` under `table`.
///
/// Returns spans ordered by ascending offset, contiguous, non-overlapping,
/// concatenating back to `text` exactly. Identical inputs always yield
/// identical output.
///
/// # Errors
/// [`Error::ZeroWidthMatch`] if a registered pattern matches zero length, a
/// table-definition defect that would otherwise stall the cursor.
pub fn classify<'s>(table: &PatternTable, text: &'s str) -> Result<Vec<Classified<'s>>, Error> {
    let mut out = Vec::new();
    let mut cursor = 0;
    let mut previous: Option<StyleTag> = None;

    while cursor < text.len() {
        let suffix = &text[cursor..];

        let winner = match first_match(table.shortcuts(), suffix, previous)? {
            Some(hit) => Some(hit),
            None => first_match(table.fallthroughs(), suffix, previous)?,
        };

        let span = match winner {
            Some((pattern, len)) => Classified {
                token: Token::new(pattern.tag(), &text[cursor..cursor + len], cursor),
                embed: pattern.embedded_language().cloned(),
            },
            None => {
                // Totality fallback: claim exactly one character
                let width = suffix
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                Classified {
                    token: Token::new(
                        StyleTag::Unrecognized,
                        &text[cursor..cursor + width],
                        cursor,
                    ),
                    embed: None,
                }
            }
        };

        log_debug!(
            "classified {:?} [{}..{}] as {}",
            span.token.text,
            span.token.start,
            span.token.end(),
            span.token.tag
        );

        previous = Some(span.token.tag);
        cursor = span.token.end();
        out.push(span);
    }

    Ok(out)
}

/// First pattern in `patterns` that matches the suffix start, with its length.
///
/// Skips patterns whose leading-character or context gates reject; stops at
/// the first match. A zero-length match fails fast naming the pattern.
fn first_match<'p>(
    patterns: &'p [Pattern],
    suffix: &str,
    previous: Option<StyleTag>,
) -> Result<Option<(&'p Pattern, usize)>, Error> {
    for pattern in patterns {
        if !pattern.applies_after(previous) {
            continue;
        }
        if !pattern.leading_accepts(suffix) {
            continue;
        }
        if let Some(len) = pattern.find(suffix) {
            if len == 0 {
                return Err(Error::ZeroWidthMatch {
                    tag: pattern.tag(),
                    pattern: pattern.source().to_string(),
                });
            }
            return Ok(Some((pattern, len)));
        }
    }
    Ok(None)
}
