//! Lua language pack
//!
//! Strings and comments use Lua's long-bracket form `[=*[ ... ]=*]`, where
//! the closing bracket must carry the same number of `=` signs as the
//! opening one. That needs a backreference, which the regex crate does not
//! support, so both rules use custom matchers.

use super::{WHITESPACE_CHARS, WHITESPACE_PATTERN};
use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::TableBuilder;

/// Match a long bracket `[=*[ ... ]=*]` at the suffix start.
///
/// An unterminated block runs to the end of input, like an unterminated
/// string would.
fn long_bracket(suffix: &str) -> Option<usize> {
    let bytes = suffix.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }
    let mut level = 0;
    while bytes.get(1 + level) == Some(&b'=') {
        level += 1;
    }
    if bytes.get(1 + level) != Some(&b'[') {
        return None;
    }

    let body = 2 + level;
    let closer = format!("]{}]", "=".repeat(level));
    match suffix[body..].find(&closer) {
        Some(i) => Some(body + i + closer.len()),
        None => Some(suffix.len()),
    }
}

/// A comment is two dashes followed by either a long bracket or the rest of
/// the line.
fn comment(suffix: &str) -> Option<usize> {
    let rest = suffix.strip_prefix("--")?;
    if let Some(len) = long_bracket(rest) {
        return Some(2 + len);
    }
    let line = rest.find(['\r', '\n']).unwrap_or(rest.len());
    Some(2 + line)
}

/// Register the Lua table under `lua` / `.lua`.
pub fn register(registry: &mut Registry) -> Result<(), Error> {
    let table = TableBuilder::new()
        // Whitespace
        .shortcut(
            Pattern::regex(StyleTag::Plain, WHITESPACE_PATTERN)?.leading(WHITESPACE_CHARS),
        )
        // A double or single quoted, possibly multi-line, string
        .shortcut(
            Pattern::regex(
                StyleTag::Str,
                r#"^(?:"(?:[^"\\]|\\[\s\S])*(?:"|$)|'(?:[^'\\]|\\[\s\S])*(?:'|$))"#,
            )?
            .leading("\"'"),
        )
        // A line comment starting with two dashes, or two dashes preceding
        // a long bracketed block
        .fallthrough(Pattern::custom(
            StyleTag::Comment,
            "^--(?:[(=*)[...]\\1]|[^\\r\\n]*)",
            comment,
        ))
        // A long bracketed block not preceded by -- is a string
        .fallthrough(Pattern::custom(
            StyleTag::Str,
            "^[(=*)[...]\\1]",
            long_bracket,
        ))
        .fallthrough(Pattern::regex(
            StyleTag::Keyword,
            r"^(?:and|break|do|else|elseif|end|false|for|function|if|in|local|nil|not|or|repeat|return|then|true|until|while)\b",
        )?)
        // A number is a hex integer literal, a decimal real literal, or in
        // scientific notation
        .fallthrough(Pattern::regex(
            StyleTag::Literal,
            r"(?i)^[+-]?(?:0x[\da-f]+|(?:(?:\.\d+|\d+(?:\.\d*)?)(?:e[+\-]?\d+)?))",
        )?)
        // An identifier
        .fallthrough(Pattern::regex(StyleTag::Plain, r"(?i)^[a-z_]\w*")?)
        // A run of punctuation
        .fallthrough(Pattern::regex(
            StyleTag::Punctuation,
            r#"^[^\w\t\n\r \xA0][^\w\n\r \xA0"'\-+=]*"#,
        )?)
        .build();

    registry.register("lua", &["lua"], table)
}
