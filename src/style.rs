//! Style tags attached to classified tokens
//!
//! A [`StyleTag`] is the classification label a consumer maps to visual
//! presentation (color, font). The set is open-ended: the common labels are
//! enum variants, and languages may introduce private labels via
//! [`StyleTag::Custom`] (the Lisp pack tags bracket runs `opn`/`clo` so a
//! renderer can rainbow-match them).

use serde::{Serialize, Serializer};
use std::fmt;

/// Classification label for a token.
///
/// Serializes as its string name, e.g. `"keyword"`. Mapping a tag to colors
/// or fonts is entirely the consumer's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Ordinary text: whitespace, identifiers, anything without a style
    Plain,
    /// String literal
    Str,
    /// Language keyword
    Keyword,
    /// Comment
    Comment,
    /// Type name
    Type,
    /// Numeric or other non-string literal
    Literal,
    /// A run of punctuation or operators
    Punctuation,
    /// Markup tag name
    Tag,
    /// Declaration, e.g. a doctype or processing instruction
    Declaration,
    /// Embedded source region in a markup document
    Source,
    /// Markup attribute name
    AttrName,
    /// Markup attribute value
    AttrValue,
    /// A character no registered pattern claimed
    Unrecognized,
    /// Language-private label outside the common set
    Custom(&'static str),
}

impl StyleTag {
    /// The string form of the tag, as seen by downstream consumers.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Plain => "plain",
            StyleTag::Str => "string",
            StyleTag::Keyword => "keyword",
            StyleTag::Comment => "comment",
            StyleTag::Type => "type",
            StyleTag::Literal => "literal",
            StyleTag::Punctuation => "punctuation",
            StyleTag::Tag => "tag",
            StyleTag::Declaration => "declaration",
            StyleTag::Source => "source",
            StyleTag::AttrName => "attr-name",
            StyleTag::AttrValue => "attr-value",
            StyleTag::Unrecognized => "unrecognized",
            StyleTag::Custom(name) => name,
        }
    }

    /// Parse one of the common tag names.
    ///
    /// Returns `None` for names outside the common set; `Custom` tags are
    /// code-defined and have no stable string-to-tag mapping.
    pub fn parse(name: &str) -> Option<StyleTag> {
        Some(match name {
            "plain" => StyleTag::Plain,
            "string" => StyleTag::Str,
            "keyword" => StyleTag::Keyword,
            "comment" => StyleTag::Comment,
            "type" => StyleTag::Type,
            "literal" => StyleTag::Literal,
            "punctuation" => StyleTag::Punctuation,
            "tag" => StyleTag::Tag,
            "declaration" => StyleTag::Declaration,
            "source" => StyleTag::Source,
            "attr-name" => StyleTag::AttrName,
            "attr-value" => StyleTag::AttrValue,
            "unrecognized" => StyleTag::Unrecognized,
            _ => return None,
        })
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StyleTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
