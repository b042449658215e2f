//! Lisp language pack (Common Lisp flavored; claims Scheme extensions too)
//!
//! Bracket runs get the private tags `opn`/`clo` so renderers can pair or
//! rainbow them; everything else uses the common tag set.

use super::{WHITESPACE_CHARS, WHITESPACE_PATTERN};
use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::TableBuilder;

/// Tag for runs of opening parentheses.
pub const OPEN: StyleTag = StyleTag::Custom("opn");
/// Tag for runs of closing parentheses.
pub const CLOSE: StyleTag = StyleTag::Custom("clo");

/// Register the Lisp table under `lisp` and the usual family of extensions.
pub fn register(registry: &mut Registry) -> Result<(), Error> {
    let table = TableBuilder::new()
        .shortcut(Pattern::regex(OPEN, r"^\(+")?.leading("("))
        .shortcut(Pattern::regex(CLOSE, r"^\)+")?.leading(")"))
        // A line comment that starts with ;
        .shortcut(Pattern::regex(StyleTag::Comment, r"^;[^\r\n]*")?.leading(";"))
        // Whitespace
        .shortcut(
            Pattern::regex(StyleTag::Plain, WHITESPACE_PATTERN)?.leading(WHITESPACE_CHARS),
        )
        // A double quoted, possibly multi-line, string
        .shortcut(
            Pattern::regex(StyleTag::Str, r#"^"(?:[^"\\]|\\[\s\S])*(?:"|$)"#)?.leading("\""),
        )
        .fallthrough(Pattern::regex(
            StyleTag::Keyword,
            r"(?i)^(?:block|c[ad]+r|catch|con[ds]|def(?:ine|un)|do|eq|eql|equal|equalp|eval-when|flet|format|go|if|labels|lambda|let|load-time-value|locally|macrolet|multiple-value-call|nil|progn|progv|quote|require|return-from|setq|symbol-macrolet|t|tagbody|the|throw|unwind)\b",
        )?)
        .fallthrough(Pattern::regex(
            StyleTag::Literal,
            r"(?i)^[+\-]?(?:[0#]x[0-9a-f]+|\d+/\d+|(?:\.\d+|\d+(?:\.\d*)?)(?:[ed][+\-]?\d+)?)",
        )?)
        // A single quote possibly followed by a word that optionally ends
        // with = ! or ?
        .fallthrough(Pattern::regex(
            StyleTag::Literal,
            r"^'(?:-*(?:\w|\\[\x21-\x7e])(?:[\w-]*|\\[\x21-\x7e])[=!?]?)?",
        )?)
        // A word that optionally ends with = ! or ?
        .fallthrough(Pattern::regex(
            StyleTag::Plain,
            r"(?i)^-*(?:[a-z_]|\\[\x21-\x7e])(?:[\w-]*|\\[\x21-\x7e])[=!?]?",
        )?)
        // A printable non-space non-special character
        .fallthrough(Pattern::regex(
            StyleTag::Punctuation,
            r#"^[^\w\t\n\r \xA0()"\\';]+"#,
        )?)
        .build();

    registry.register("lisp", &["cl", "el", "lisp", "lsp", "scm", "ss", "rkt"], table)
}
