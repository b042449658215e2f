//! BASIC language pack (Commodore-era dialect)

use super::WHITESPACE_CHARS;
use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::TableBuilder;

/// Register the BASIC table under `basic` / `.basic` / `.cbm`.
pub fn register(registry: &mut Registry) -> Result<(), Error> {
    let table = TableBuilder::new()
        // A single-line string; no escape continuation across lines
        .shortcut(
            Pattern::regex(StyleTag::Str, r#"^(?:"(?:[^\\"\r\n]|\\.)*(?:"|$))"#)?.leading("\""),
        )
        // Whitespace
        .shortcut(Pattern::regex(StyleTag::Plain, r"^\s+")?.leading(WHITESPACE_CHARS))
        // A line comment starting with REM
        .fallthrough(Pattern::regex(StyleTag::Comment, r"^REM[^\r\n]*")?)
        .fallthrough(Pattern::regex(
            StyleTag::Keyword,
            r"^\b(?:AND|CLOSE|CLR|CMD|CONT|DATA|DEF ?FN|DIM|END|FOR|GET|GOSUB|GOTO|IF|INPUT|LET|LIST|LOAD|NEW|NEXT|NOT|ON|OPEN|OR|POKE|PRINT|READ|RESTORE|RETURN|RUN|SAVE|STEP|STOP|SYS|THEN|TO|VERIFY|WAIT)\b",
        )?)
        // Two-character variable names, with $ and % type sigils
        .fallthrough(Pattern::regex(
            StyleTag::Plain,
            r"(?i)^[A-Z][A-Z0-9]?(?:\$|%)?",
        )?)
        // Literals .0, 0, 0.0 0E13
        .fallthrough(
            Pattern::regex(
                StyleTag::Literal,
                r"(?i)^(?:\d+(?:\.\d*)?|\.\d+)(?:e[+\-]?\d+)?",
            )?
            .leading("0123456789"),
        )
        .fallthrough(Pattern::regex(
            StyleTag::Punctuation,
            r#"^.[^\s\w.$%"]*"#,
        )?)
        .build();

    registry.register("basic", &["basic", "cbm"], table)
}
