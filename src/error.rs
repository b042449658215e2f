//! Error type for table construction, registration and classification
//!
//! Malformed *input* is never an error: characters no pattern claims become
//! single-character `unrecognized` tokens. Errors here are configuration
//! defects (bad regex, zero-width match, reference cycles) or lookups of
//! languages that were never registered.

use crate::style::StyleTag;
use std::fmt;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A language id or file extension has no registration, or an embedded
    /// language referenced by a pattern was never registered.
    UnknownLanguage {
        /// The unresolved identifier or extension
        language: String,
    },

    /// A pattern's regex failed to compile at table-build time.
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// The regex crate's diagnostic
        message: String,
    },

    /// A registered pattern matched zero length, which would stall the
    /// classifier. A language-definition bug, raised at first occurrence.
    ZeroWidthMatch {
        /// Tag of the offending pattern
        tag: StyleTag,
        /// Source of the offending pattern
        pattern: String,
    },

    /// Extension/embedding references form a cycle. Rejected at registration
    /// time, before classification could recurse without bound.
    CompositionCycle {
        /// The language ids along the cycle, ending where it closes
        path: Vec<String>,
    },

    /// A JSON language definition failed to deserialize or compile.
    InvalidDefinition {
        /// What was wrong with it
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLanguage { language } => {
                write!(f, "unknown language: {}", language)
            }
            Error::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern `{}`: {}", pattern, message)
            }
            Error::ZeroWidthMatch { tag, pattern } => {
                write!(
                    f,
                    "pattern `{}` (tag {}) matched zero length; every match must consume input",
                    pattern, tag
                )
            }
            Error::CompositionCycle { path } => {
                write!(f, "composition cycle: {}", path.join(" -> "))
            }
            Error::InvalidDefinition { message } => {
                write!(f, "invalid language definition: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}
