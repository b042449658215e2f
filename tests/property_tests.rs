//! Property-based tests using proptest
//!
//! These tests verify the classifier's structural guarantees (coverage,
//! ordering, determinism) across a wide range of generated inputs.

use proptest::prelude::*;
use stylemark::{classify, langs, Pattern, Registry, StyleTag, TableBuilder};

fn word_table() -> stylemark::PatternTable {
    TableBuilder::new()
        .shortcut(Pattern::regex(StyleTag::Plain, r"^\s+").unwrap())
        .fallthrough(Pattern::regex(StyleTag::Keyword, r"^(?:if|else|while)\b").unwrap())
        .fallthrough(Pattern::regex(StyleTag::Literal, r"^\d+").unwrap())
        .fallthrough(Pattern::regex(StyleTag::Plain, r"^[a-zA-Z_]\w*").unwrap())
        .fallthrough(Pattern::regex(StyleTag::Punctuation, r"^[^\w\s]+").unwrap())
        .build()
}

fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    langs::register_builtins(&mut registry).unwrap();
    registry
}

// =============================================================================
// Coverage and Ordering
// =============================================================================

proptest! {
    /// Concatenating every token's text reconstructs the input exactly
    #[test]
    fn test_tokens_cover_input(input in ".{0,200}") {
        let table = word_table();
        let spans = classify(&table, &input).unwrap();

        let rebuilt: String = spans.iter().map(|s| s.token.text).collect();
        prop_assert_eq!(rebuilt, input);
    }

    /// Token offsets are contiguous: each starts where the previous ended
    #[test]
    fn test_tokens_are_contiguous(input in ".{0,200}") {
        let table = word_table();
        let spans = classify(&table, &input).unwrap();

        let mut cursor = 0;
        for span in &spans {
            prop_assert_eq!(span.token.start, cursor);
            cursor = span.token.end();
        }
        prop_assert_eq!(cursor, input.len());
    }

    /// No token is ever empty
    #[test]
    fn test_no_empty_tokens(input in ".{0,200}") {
        let table = word_table();
        for span in classify(&table, &input).unwrap() {
            prop_assert!(!span.token.is_empty());
        }
    }

    /// Token count is bounded by input length
    #[test]
    fn test_token_count_bounded(input in ".{0,200}") {
        let table = word_table();
        let spans = classify(&table, &input).unwrap();
        prop_assert!(spans.len() <= input.len());
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Classifying the same input twice yields identical output
    #[test]
    fn test_classification_is_deterministic(input in ".{0,200}") {
        let table = word_table();
        let first = classify(&table, &input).unwrap();
        let second = classify(&table, &input).unwrap();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Totality Over Arbitrary Input
// =============================================================================

proptest! {
    /// Every built-in language classifies arbitrary text without error
    #[test]
    fn test_builtins_total(input in "\\PC{0,120}") {
        let registry = builtin_registry();
        for id in ["apollo", "basic", "lisp", "lua", "rd", "sql"] {
            let tokens = registry.classify(id, &input).unwrap();
            let rebuilt: String = tokens.iter().map(|t| t.text).collect();
            prop_assert_eq!(&rebuilt, &input);
        }
    }

    /// Input with no matching rule degrades to single-char tokens
    #[test]
    fn test_unmatched_runs_become_char_tokens(input in "[\u{a1}-\u{ff}]{1,40}") {
        // Latin-1 supplement characters miss every rule in this table.
        let table = TableBuilder::new()
            .fallthrough(Pattern::regex(StyleTag::Plain, r"^[a-z]+").unwrap())
            .build();
        let spans = classify(&table, &input).unwrap();

        prop_assert_eq!(spans.len(), input.chars().count());
        for span in &spans {
            prop_assert_eq!(span.token.tag, StyleTag::Unrecognized);
            prop_assert_eq!(span.token.text.chars().count(), 1);
        }
    }
}

// =============================================================================
// Keyword Matching
// =============================================================================

proptest! {
    /// Generated keywords always classify as keywords, never as plain words
    #[test]
    fn test_keywords_recognized(kw in "(if|else|while)", pad in "[a-z]{1,8}") {
        let table = word_table();
        let input = format!("{} {}", kw, pad);
        let spans = classify(&table, &input).unwrap();

        prop_assert_eq!(spans[0].token.tag, StyleTag::Keyword);
        prop_assert_eq!(spans[0].token.text, kw);
    }

    /// Identifiers that merely start with a keyword stay plain
    #[test]
    fn test_keyword_prefix_is_not_keyword(suffix in "[a-z]{1,8}") {
        let table = word_table();
        let input = format!("if{}", suffix);
        let spans = classify(&table, &input).unwrap();

        prop_assert_eq!(spans.len(), 1);
        prop_assert_eq!(spans[0].token.tag, StyleTag::Plain);
    }
}

// =============================================================================
// Registry Under Load
// =============================================================================

proptest! {
    /// Lua survives long runs of a single character
    #[test]
    fn test_long_homogeneous_input(n in 500usize..2000) {
        let registry = builtin_registry();
        let input = "a".repeat(n);
        let tokens = registry.classify("lua", &input).unwrap();
        // One identifier token covers the whole run
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].len(), n);
    }

    /// Extension lookup and id lookup agree
    #[test]
    fn test_resolve_consistent(_seed in 0usize..20) {
        let registry = builtin_registry();
        prop_assert_eq!(registry.resolve("lua").unwrap(), "lua");
        prop_assert_eq!(registry.resolve("scm").unwrap(), "lisp");
        prop_assert_eq!(registry.resolve("cbm").unwrap(), "basic");
    }
}
