//! Built-in language packs
//!
//! Each submodule defines one language's pattern table through the public
//! builder API and registers it under its id and file extensions. The packs
//! are configuration data, not engine logic: nothing here is special-cased by
//! the classifier, and a downstream crate can define languages of equal
//! standing through [`TableBuilder`](crate::TableBuilder) or JSON
//! definitions.

use crate::error::Error;
use crate::registry::Registry;

pub mod apollo;
pub mod basic;
pub mod lisp;
pub mod lua;
pub mod rd;
pub mod sql;

/// The whitespace run pattern shared by most packs. NBSP included.
pub(crate) const WHITESPACE_PATTERN: &str = r"^[\t\n\r \xA0]+";

/// Leading-character set matching [`WHITESPACE_PATTERN`].
pub(crate) const WHITESPACE_CHARS: &str = "\t\n\r \u{a0}";

/// Register every built-in language pack.
pub fn register_builtins(registry: &mut Registry) -> Result<(), Error> {
    apollo::register(registry)?;
    basic::register(registry)?;
    lisp::register(registry)?;
    lua::register(registry)?;
    rd::register(registry)?;
    sql::register(registry)?;
    Ok(())
}
