//! Pattern: one matching rule of a language table
//!
//! A [`Pattern`] pairs a [`StyleTag`] with an anchored matcher over a suffix
//! of the input. Matchers are usually compiled regexes; constructs the regex
//! crate cannot express (Lua long brackets need backreferences) use a custom
//! matcher function instead.
//!
//! Two optional gates refine dispatch:
//! - `leading`: a set of acceptable first characters, consulted before the
//!   matcher runs. A pure fast-reject; skipping it never changes results.
//! - `context`: a predicate over the tag of the most recently emitted token,
//!   for rules that only apply after certain tags (disambiguating a leading
//!   slash as comment-start vs. division, say).
//!
//! A pattern may also flag its matches as embedded sub-language regions via
//! [`Pattern::embed`]; the composer re-classifies those under the named
//! language's table.

use crate::error::Error;
use crate::regex_cache;
use crate::style::StyleTag;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Predicate over the previously emitted tag (`None` at start of input).
pub type ContextPredicate = Arc<dyn Fn(Option<StyleTag>) -> bool + Send + Sync>;

/// Custom anchored matcher: returns the match length at the suffix start,
/// or `None` if the pattern does not match there. Must never scan ahead.
pub type MatcherFn = Arc<dyn Fn(&str) -> Option<usize> + Send + Sync>;

/// The matching half of a pattern.
#[derive(Clone)]
pub enum Matcher {
    /// Compiled regex, anchored as `^(?:...)`
    Regex(Regex),
    /// Custom matcher function
    Custom(MatcherFn),
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            Matcher::Custom(_) => f.debug_tuple("Custom").field(&"<fn>").finish(),
        }
    }
}

/// One matching rule: tag + anchored matcher + optional dispatch gates.
///
/// Immutable once constructed; tables clone patterns freely when flattening
/// extensions, so all shared parts are reference-counted.
#[derive(Clone)]
pub struct Pattern {
    tag: StyleTag,
    matcher: Matcher,
    /// Acceptable first characters, when known
    leading: Option<Box<str>>,
    /// Restriction on the previously emitted tag
    context: Option<ContextPredicate>,
    /// Language id whose rules re-classify this pattern's matches
    embed: Option<Arc<str>>,
    /// Diagnostic source: the regex source or a custom matcher description
    source: Box<str>,
}

impl Pattern {
    /// Create a pattern from a regex source.
    ///
    /// The source is compiled anchored (a leading `^` is accepted and
    /// redundant) and cached across tables.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] if the regex does not compile.
    pub fn regex(tag: StyleTag, source: &str) -> Result<Self, Error> {
        let compiled = regex_cache::compile_anchored(source)?;
        Ok(Pattern {
            tag,
            matcher: Matcher::Regex(compiled),
            leading: None,
            context: None,
            embed: None,
            source: source.into(),
        })
    }

    /// Create a pattern from a custom matcher function.
    ///
    /// `description` stands in for the regex source in diagnostics. The
    /// function must be anchored: it reports a match length at the start of
    /// the given suffix or declines.
    pub fn custom<F>(tag: StyleTag, description: &str, matcher: F) -> Self
    where
        F: Fn(&str) -> Option<usize> + Send + Sync + 'static,
    {
        Pattern {
            tag,
            matcher: Matcher::Custom(Arc::new(matcher)),
            leading: None,
            context: None,
            embed: None,
            source: description.into(),
        }
    }

    /// Restrict dispatch to suffixes starting with one of `chars`.
    ///
    /// A performance hint only: the set must be a superset of the characters
    /// the matcher can start on, never a narrowing of them.
    pub fn leading(mut self, chars: &str) -> Self {
        self.leading = Some(chars.into());
        self
    }

    /// Restrict applicability based on the previously emitted tag.
    pub fn context<F>(mut self, predicate: F) -> Self
    where
        F: Fn(Option<StyleTag>) -> bool + Send + Sync + 'static,
    {
        self.context = Some(Arc::new(predicate));
        self
    }

    /// Flag matches of this pattern as regions written in `language`.
    ///
    /// The composer re-classifies such regions under that language's table
    /// and splices the result back into parent coordinates.
    pub fn embed(mut self, language: &str) -> Self {
        self.embed = Some(language.into());
        self
    }

    /// The tag emitted for this pattern's matches.
    #[inline]
    pub fn tag(&self) -> StyleTag {
        self.tag
    }

    /// Diagnostic source of the matcher.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The embedded language id, if any.
    #[inline]
    pub fn embedded_language(&self) -> Option<&Arc<str>> {
        self.embed.as_ref()
    }

    /// Whether the context gate admits the previously emitted tag.
    #[inline]
    pub(crate) fn applies_after(&self, previous: Option<StyleTag>) -> bool {
        match &self.context {
            Some(predicate) => predicate(previous),
            None => true,
        }
    }

    /// Whether the leading-character gate admits the suffix.
    ///
    /// `suffix` is never empty when the classifier consults this.
    #[inline]
    pub(crate) fn leading_accepts(&self, suffix: &str) -> bool {
        let Some(leading) = &self.leading else {
            return true;
        };
        let Some(ch) = suffix.chars().next() else {
            return false;
        };
        if ch.is_ascii() {
            memchr::memchr(ch as u8, leading.as_bytes()).is_some()
        } else {
            leading.contains(ch)
        }
    }

    /// Attempt the matcher at the start of `suffix`.
    #[inline]
    pub fn find(&self, suffix: &str) -> Option<usize> {
        match &self.matcher {
            Matcher::Regex(re) => re.find(suffix).map(|m| m.end()),
            Matcher::Custom(f) => f(suffix),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("tag", &self.tag)
            .field("source", &self.source)
            .field("leading", &self.leading)
            .field("embed", &self.embed)
            .finish()
    }
}
