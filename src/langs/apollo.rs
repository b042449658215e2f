//! Apollo AGC assembly language pack
//!
//! Opcode mnemonics style as keywords and assembler directives as types;
//! both consume the trailing whitespace that must follow them, as the
//! original column-oriented format requires.

use super::{WHITESPACE_CHARS, WHITESPACE_PATTERN};
use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::TableBuilder;

/// Register the Apollo table under `apollo` / `.agc` / `.aea`.
pub fn register(registry: &mut Registry) -> Result<(), Error> {
    let table = TableBuilder::new()
        // A line comment that starts with #
        .shortcut(Pattern::regex(StyleTag::Comment, r"^#[^\r\n]*")?.leading("#"))
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
            r"^(?:ADS|AD|AUG|BZF|BZMF|CAE|CAF|CA|CCS|COM|CS|DAS|DCA|DCOM|DCS|DDOUBL|DIM|DOUBLE|DTCB|DTCF|DV|DXCH|EDRUPT|EXTEND|INCR|INDEX|NDX|INHINT|LXCH|MASK|MSK|MP|MSU|NOOP|OVSK|QXCH|RAND|READ|RELINT|RESUME|RETURN|ROR|RXOR|SQUARE|SU|TCR|TCAA|OVSK|TCF|TC|TS|WAND|WOR|WRITE|XCH|XLQ|XXALQ|ZL|ZQ|ADD|ADZ|SUB|SUZ|MPY|MPR|MPZ|DVP|COM|ABS|CLA|CLZ|LDQ|STO|STQ|ALS|LLS|LRS|TRA|TSQ|TMI|TOV|AXT|TIX|DLY|INP|OUT)\s",
        )?)
        .fallthrough(Pattern::regex(
            StyleTag::Type,
            r"^(?:-?GENADR|=MINUS|2BCADR|VN|BOF|MM|-?2CADR|-?[1-6]DNADR|ADRES|BBCON|[SE]?BANK=?|BLOCK|BNKSUM|E?CADR|COUNT\*?|2?DEC\*?|-?DNCHAN|-?DNPTR|EQUALS|ERASE|MEMORY|2?OCT|REMADR|SETLOC|SUBRO|ORG|BSS|BES|SYN|EQU|DEFINE|END)\s",
        )?)
        // A single quote possibly followed by a word that optionally ends
        // with = ! or ?
        .fallthrough(Pattern::regex(
            StyleTag::Literal,
            r"^'(?:-*(?:\w|\\[\x21-\x7e])(?:[\w-]*|\\[\x21-\x7e])[=!?]?)?",
        )?)
        // Any word including labels that optionally ends with = ! or ?
        .fallthrough(Pattern::regex(
            StyleTag::Plain,
            r"(?i)^-*(?:[!-z_]|\\[\x21-\x7e])(?:[\w-]*|\\[\x21-\x7e])[=!?]?",
        )?)
        // A printable non-space non-special character
        .fallthrough(Pattern::regex(
            StyleTag::Punctuation,
            r#"^[^\w\t\n\r \xA0()"\\';]+"#,
        )?)
        .build();

    registry.register("apollo", &["apollo", "agc", "aea"], table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        register(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_opcode_line() {
        let input = "LOOP\tTS\tTIME1\t# reset timer";
        let tokens = registry().classify("apollo", input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, input);

        assert_eq!(tokens[0].tag, StyleTag::Plain);
        assert_eq!(tokens[0].text, "LOOP");
        // Mnemonics consume their trailing whitespace
        assert!(tokens
            .iter()
            .any(|t| t.tag == StyleTag::Keyword && t.text == "TS\t"));
        assert_eq!(tokens.last().unwrap().tag, StyleTag::Comment);
    }

    #[test]
    fn test_directive_styles_as_type() {
        let tokens = registry().classify("apollo", "TIME1\tERASE 0\n").unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.tag == StyleTag::Type && t.text == "ERASE "));
    }

    #[test]
    fn test_mnemonic_at_end_of_input_is_plain() {
        // The trailing-whitespace requirement is part of the pattern
        let tokens = registry().classify("apollo", "RETURN").unwrap();
        assert_eq!(tokens[0].tag, StyleTag::Plain);
    }
}
