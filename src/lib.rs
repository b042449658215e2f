//! Stylemark - Lexical Classification Engine for Syntax Highlighting
//!
//! Stylemark turns raw source text into a flat, gap-free stream of styled
//! tokens (comment, string, keyword, literal, punctuation, ...) suitable for
//! syntax highlighting. It provides:
//! - Priority-ordered pattern matching with shortcut/fallthrough dispatch
//! - Declarative per-language pattern tables, immutable once built
//! - Recursive composition: token regions flagged as embedded sub-languages
//!   are re-classified under another language's rules and spliced back
//! - A language registry mapping identifiers and file extensions to tables,
//!   with cycle rejection at registration time
//! - JSON language definitions for data-driven table construction
//! - Built-in language packs (Lua, BASIC, Lisp, SQL, Rd, Apollo AGC)
//!
//! The engine never parses into an AST and never fails on malformed input:
//! characters no pattern claims become single-character `unrecognized` tokens,
//! so classification is total over arbitrary valid UTF-8.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylemark::{langs, Registry};
//!
//! let mut registry = Registry::new();
//! langs::register_builtins(&mut registry).unwrap();
//!
//! let tokens = registry.classify("lua", "local x = 1").unwrap();
//! let rebuilt: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(rebuilt, "local x = 1");
//! ```
//!
//! ## Defining a Language with the Builder
//!
//! ```rust
//! use stylemark::{Pattern, Registry, StyleTag, TableBuilder};
//!
//! let table = TableBuilder::new()
//!     .shortcut(Pattern::regex(StyleTag::Plain, r"^\s+").unwrap())
//!     .fallthrough(Pattern::regex(StyleTag::Keyword, r"^(?:if|else)\b").unwrap())
//!     .fallthrough(Pattern::regex(StyleTag::Plain, r"^\w+").unwrap())
//!     .build();
//!
//! let mut registry = Registry::new();
//! registry.register("mini", &["mini"], table).unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

// Prelude module for convenient imports
pub mod prelude;

pub mod classifier;
pub mod composer;
pub mod definition;
pub mod error;
pub mod langs;
pub mod pattern;
pub mod regex_cache;
pub mod registry;
pub mod style;
pub mod table;
pub mod token;

/// Re-export commonly used types for convenience
pub use classifier::{classify, Classified};
pub use composer::compose;
pub use definition::{LanguageDef, PatternDef};
pub use error::Error;
pub use pattern::{Matcher, Pattern};
pub use registry::Registry;
pub use style::StyleTag;
pub use table::{PatternTable, TableBuilder};
pub use token::Token;
