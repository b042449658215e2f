//! Integration tests for the built-in language packs
//!
//! One realistic snippet per language, plus a coverage sweep running every
//! pack over every snippet: any registered language must classify any text
//! completely, including text in the wrong language.

use stylemark::{langs, Registry, StyleTag};

fn registry() -> Registry {
    let mut registry = Registry::new();
    langs::register_builtins(&mut registry).unwrap();
    registry
}

const SNIPPETS: &[(&str, &str)] = &[
    (
        "lua",
        "-- doubles a number\nlocal function twice(n)\n  return n * 2\nend\n",
    ),
    (
        "basic",
        "10 REM COUNTDOWN\n20 FOR I = 9 TO 0 STEP -1\n30 PRINT I\n40 NEXT I\n",
    ),
    (
        "lisp",
        "(defun fact (n)\n  ; naive\n  (if (eql n 0) 1 (* n (fact (- n 1)))))\n",
    ),
    (
        "sql",
        "SELECT name, age FROM people /* all of them */ WHERE age < 100;\n",
    ),
    (
        "rd",
        "\\name{plot}\n\\title{Plotting}\n% internal\n\\dots\n",
    ),
    (
        "apollo",
        "# P63 IGNITION\nBURNBABY\tTC\tBANKCALL\n\tCAF\tZERO\n",
    ),
];

#[test]
fn test_every_snippet_reconstructs_under_its_own_language() {
    let registry = registry();
    for (lang, snippet) in SNIPPETS {
        let tokens = registry.classify(lang, snippet).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(&rebuilt, snippet, "coverage violated for {}", lang);
    }
}

#[test]
fn test_every_pack_is_total_over_foreign_text() {
    let registry = registry();
    for (lang, _) in SNIPPETS {
        for (_, snippet) in SNIPPETS {
            let tokens = registry.classify(lang, snippet).unwrap();
            let rebuilt: String = tokens.iter().map(|t| t.text).collect();
            assert_eq!(&rebuilt, snippet);
        }
    }
}

#[test]
fn test_lua_snippet_tags() {
    let tokens = registry()
        .classify("lua", "-- doubles\nlocal function twice(n) end")
        .unwrap();
    assert_eq!(tokens[0].tag, StyleTag::Comment);
    let keywords: Vec<_> = tokens
        .iter()
        .filter(|t| t.tag == StyleTag::Keyword)
        .map(|t| t.text)
        .collect();
    assert_eq!(keywords, vec!["local", "function", "end"]);
}

#[test]
fn test_basic_snippet_tags() {
    let tokens = registry().classify("basic", "20 FOR I = 9 TO 0").unwrap();
    let keywords: Vec<_> = tokens
        .iter()
        .filter(|t| t.tag == StyleTag::Keyword)
        .map(|t| t.text)
        .collect();
    assert_eq!(keywords, vec!["FOR", "TO"]);
    let literals: Vec<_> = tokens
        .iter()
        .filter(|t| t.tag == StyleTag::Literal)
        .map(|t| t.text)
        .collect();
    assert_eq!(literals, vec!["20", "9", "0"]);
}

#[test]
fn test_sql_mixed_case() {
    let tokens = registry()
        .classify("sql", "Select * From t Where x Is Not Null")
        .unwrap();
    let keywords = tokens
        .iter()
        .filter(|t| t.tag == StyleTag::Keyword)
        .count();
    assert_eq!(keywords, 6);
}

#[test]
fn test_binary_garbage_never_errors() {
    let registry = registry();
    let garbage: String = (0u8..=0x7f).map(|b| b as char).collect();
    for (lang, _) in SNIPPETS {
        let tokens = registry.classify(lang, &garbage).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, garbage);
    }
}
