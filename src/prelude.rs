//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types so downstream code can write
//! `use stylemark::prelude::*;` and get everything needed to define
//! languages and classify text.

pub use crate::classifier::{classify, Classified};
pub use crate::composer::compose;
pub use crate::definition::{LanguageDef, PatternDef};
pub use crate::error::Error;
pub use crate::langs::register_builtins;
pub use crate::pattern::{Matcher, Pattern};
pub use crate::registry::Registry;
pub use crate::style::StyleTag;
pub use crate::table::{PatternTable, TableBuilder};
pub use crate::token::Token;
