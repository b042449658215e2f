//! PatternTable: the declarative rule set of one language
//!
//! A [`PatternTable`] is an immutable, ordered bundle of rules built once at
//! language-registration time via [`TableBuilder`]. Two ordered groups define
//! priority: **shortcut** patterns are tried first, in declaration order;
//! **fallthrough** patterns second, in declaration order, only when no
//! shortcut matched. Within a group the first non-empty match wins; this is
//! explicit first-match, not longest-match, so each language orders its own
//! rules to resolve its own ambiguities.
//!
//! A table may also name other registered languages in `extended`; the
//! registry absorbs their fallthrough rules by appending them to this table's
//! fallthrough list, preserving the absorbed order, so composition behaves
//! like textual inclusion.

use crate::pattern::Pattern;

/// Immutable, ordered bundle of shortcut and fallthrough patterns.
#[derive(Debug, Clone)]
pub struct PatternTable {
    shortcuts: Vec<Pattern>,
    fallthroughs: Vec<Pattern>,
    /// Language ids whose fallthrough rules this table absorbs at
    /// registration time
    extended: Vec<String>,
}

impl PatternTable {
    /// Shortcut patterns, in declaration order.
    #[inline]
    pub fn shortcuts(&self) -> &[Pattern] {
        &self.shortcuts
    }

    /// Fallthrough patterns, in declaration order.
    ///
    /// On a table obtained from a registry this is the effective list,
    /// absorbed extension rules included.
    #[inline]
    pub fn fallthroughs(&self) -> &[Pattern] {
        &self.fallthroughs
    }

    /// Languages this table extends, in declaration order.
    #[inline]
    pub fn extended(&self) -> &[String] {
        &self.extended
    }

    /// Language ids referenced by embed flags anywhere in this table.
    pub(crate) fn embedded_languages(&self) -> Vec<&str> {
        self.shortcuts
            .iter()
            .chain(self.fallthroughs.iter())
            .filter_map(|p| p.embedded_language().map(|id| id.as_ref()))
            .collect()
    }

    /// The effective table after extension resolution: own rules plus the
    /// absorbed fallthroughs, with the references cleared.
    pub(crate) fn flatten_with(&self, absorbed: Vec<Pattern>) -> PatternTable {
        let mut fallthroughs =
            Vec::with_capacity(self.fallthroughs.len() + absorbed.len());
        fallthroughs.extend(self.fallthroughs.iter().cloned());
        fallthroughs.extend(absorbed);
        PatternTable {
            shortcuts: self.shortcuts.clone(),
            fallthroughs,
            extended: Vec::new(),
        }
    }
}

/// Builder for [`PatternTable`].
///
/// The only way to construct a table; once `build()` returns, the table is
/// immutable.
#[derive(Debug, Default)]
pub struct TableBuilder {
    shortcuts: Vec<Pattern>,
    fallthroughs: Vec<Pattern>,
    extended: Vec<String>,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        TableBuilder::default()
    }

    /// Append a shortcut pattern.
    pub fn shortcut(mut self, pattern: Pattern) -> Self {
        self.shortcuts.push(pattern);
        self
    }

    /// Append a fallthrough pattern.
    pub fn fallthrough(mut self, pattern: Pattern) -> Self {
        self.fallthroughs.push(pattern);
        self
    }

    /// Absorb the fallthrough rules of another language at registration time.
    ///
    /// `language` must already be registered when this table is registered.
    pub fn extend(mut self, language: &str) -> Self {
        self.extended.push(language.to_string());
        self
    }

    /// Finish construction.
    pub fn build(self) -> PatternTable {
        PatternTable {
            shortcuts: self.shortcuts,
            fallthroughs: self.fallthroughs,
            extended: self.extended,
        }
    }
}
