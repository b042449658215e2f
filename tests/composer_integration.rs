//! Integration tests for embedded sub-language composition
//!
//! A markup-ish outer language embeds an expression language inside `{{ }}`
//! regions, which in turn embeds a digit language inside `( )` regions,
//! exercising two levels of splicing.

use stylemark::{Pattern, Registry, StyleTag, TableBuilder};

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            "digits",
            &[],
            TableBuilder::new()
                .fallthrough(Pattern::regex(StyleTag::Literal, r"^[0-9]+").unwrap())
                .fallthrough(Pattern::regex(StyleTag::Punctuation, r"^[^0-9]+").unwrap())
                .build(),
        )
        .unwrap();
    registry
        .register(
            "expr",
            &[],
            TableBuilder::new()
                .shortcut(Pattern::regex(StyleTag::Plain, r"^\s+").unwrap())
                .fallthrough(
                    Pattern::regex(StyleTag::Source, r"^\([^)]*\)")
                        .unwrap()
                        .embed("digits"),
                )
                .fallthrough(Pattern::regex(StyleTag::Keyword, r"^(?:sum|avg)\b").unwrap())
                .fallthrough(Pattern::regex(StyleTag::Plain, r"^[a-z]+").unwrap())
                .build(),
        )
        .unwrap();
    registry
        .register(
            "tmpl",
            &[],
            TableBuilder::new()
                .fallthrough(
                    Pattern::regex(StyleTag::Source, r"^\{\{[\s\S]*?\}\}")
                        .unwrap()
                        .embed("expr"),
                )
                .fallthrough(Pattern::regex(StyleTag::Plain, r"^[^{]+").unwrap())
                .fallthrough(Pattern::regex(StyleTag::Punctuation, r"^\{").unwrap())
                .build(),
        )
        .unwrap();
    registry
}

#[test]
fn test_single_level_splice() {
    let registry = registry();
    let input = "hello {{sum x}} bye";
    let tokens = registry.classify("tmpl", input).unwrap();

    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, input);

    let kw = tokens.iter().find(|t| t.tag == StyleTag::Keyword).unwrap();
    assert_eq!(kw.text, "sum");
    assert_eq!(kw.start, input.find("sum").unwrap());
}

#[test]
fn test_two_level_splice() {
    let registry = registry();
    let input = "{{sum (12,34)}}";
    let tokens = registry.classify("tmpl", input).unwrap();

    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, input);

    // The digits language classified the innermost region, remapped twice
    let literals: Vec<_> = tokens
        .iter()
        .filter(|t| t.tag == StyleTag::Literal)
        .map(|t| (t.text, t.start))
        .collect();
    assert_eq!(literals, vec![("12", 7), ("34", 10)]);
}

#[test]
fn test_splicing_fidelity() {
    // The spliced region reconstructs the flagged token's text exactly and
    // every sub-token stays inside it
    let registry = registry();
    let input = "a {{b (1) c}} d";
    let flagged_start = input.find("{{").unwrap();
    let flagged_end = input.find("}}").unwrap() + 2;

    let tokens = registry.classify("tmpl", input).unwrap();
    let inside: String = tokens
        .iter()
        .filter(|t| t.start >= flagged_start && t.end() <= flagged_end)
        .map(|t| t.text)
        .collect();
    assert_eq!(inside, &input[flagged_start..flagged_end]);
    assert!(!tokens
        .iter()
        .any(|t| t.start < flagged_end && t.end() > flagged_end));
}

#[test]
fn test_neighbors_untouched() {
    let registry = registry();
    let input = "pre {{x}} post";
    let tokens = registry.classify("tmpl", input).unwrap();
    assert_eq!(tokens.first().unwrap().text, "pre ");
    assert_eq!(tokens.last().unwrap().text, " post");
}

#[test]
fn test_embedding_tags_are_replaced_not_kept() {
    // The Source-tagged flagged token itself must not appear in the output
    let registry = registry();
    let tokens = registry.classify("tmpl", "{{x}}").unwrap();
    assert!(tokens.iter().all(|t| t.tag != StyleTag::Source));
}
