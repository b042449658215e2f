//! Rd language pack (R documentation format)
//!
//! Rd only styles its macro layer: backslash macros, preprocessor
//! directives and brackets. Running prose between them is deliberately left
//! to the classifier's one-character fallback.

use super::{WHITESPACE_CHARS, WHITESPACE_PATTERN};
use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::TableBuilder;

/// Register the Rd table under `rd` / `.Rd` / `.rd`.
pub fn register(registry: &mut Registry) -> Result<(), Error> {
    let table = TableBuilder::new()
        // Whitespace
        .shortcut(
            Pattern::regex(StyleTag::Plain, WHITESPACE_PATTERN)?.leading(WHITESPACE_CHARS),
        )
        // All comments begin with %
        .shortcut(Pattern::regex(StyleTag::Comment, r"^%[^\r\n]*")?.leading("%"))
        // Special macros with no args
        .fallthrough(Pattern::regex(StyleTag::Literal, r"^\\(?:cr|l?dots|R|tab)\b")?)
        // Macros
        .fallthrough(Pattern::regex(StyleTag::Keyword, r"^\\[a-zA-Z@]+")?)
        // Highlighted as macros, since technically they are
        .fallthrough(Pattern::regex(StyleTag::Keyword, r"^#(?:ifn?def|endif)")?)
        // Catch escaped brackets
        .fallthrough(Pattern::regex(StyleTag::Plain, r"^\\[{}]")?)
        // Punctuation
        .fallthrough(Pattern::regex(StyleTag::Punctuation, r"^[{}()\[\]]+")?)
        .build();

    registry.register("rd", &["Rd", "rd"], table)
}
