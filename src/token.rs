//! Token output type
//!
//! A [`Token`] is one styled slice of the classified input. Token lists are
//! built fresh per classification call and owned solely by the caller; the
//! engine retains nothing across calls. Text is borrowed from the input, so
//! tokenization is zero-copy.

use crate::style::StyleTag;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One styled, contiguous slice of the classified input.
///
/// For any classified input the returned tokens are ordered by ascending
/// offset, contiguous, non-overlapping, and concatenate back to the input
/// exactly. Offsets and lengths are byte-based and always fall on UTF-8
/// character boundaries.
///
/// Serializes as `{"tag", "text", "start", "length"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    /// Classification label
    pub tag: StyleTag,
    /// The matched text, borrowed from the input
    pub text: &'s str,
    /// Byte offset of `text` within the classified input
    pub start: usize,
}

impl<'s> Token<'s> {
    /// Create a token. `text` must be the slice of the input at `start`.
    pub fn new(tag: StyleTag, text: &'s str, start: usize) -> Self {
        Token { tag, text, start }
    }

    /// Length of the token in bytes. Always > 0 for emitted tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token is empty. Emitted tokens never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// The same token shifted into an enclosing coordinate space.
    ///
    /// Used by the composer to remap sub-language tokens into the parent
    /// input's offsets.
    #[inline]
    pub(crate) fn offset_by(self, base: usize) -> Self {
        Token {
            start: self.start + base,
            ..self
        }
    }
}

impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Token", 4)?;
        s.serialize_field("tag", &self.tag)?;
        s.serialize_field("text", self.text)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("length", &self.text.len())?;
        s.end()
    }
}
