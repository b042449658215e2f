//! JSON language definitions
//!
//! Language tables can be defined as data and shipped outside the engine: a
//! [`LanguageDef`] deserializes from JSON and compiles into a
//! [`PatternTable`]. The shape mirrors the builder API:
//!
//! ```json
//! {
//!     "id": "ini",
//!     "file_extensions": ["ini", "cfg"],
//!     "shortcuts": [
//!         { "tag": "plain", "pattern": "^\\s+" },
//!         { "tag": "comment", "pattern": "^[;#][^\\r\\n]*", "leading": ";#" }
//!     ],
//!     "fallthroughs": [
//!         { "tag": "declaration", "pattern": "^\\[[^\\]]*\\]" },
//!         { "tag": "plain", "pattern": "^[^\\s\\[;#=]+" },
//!         { "tag": "punctuation", "pattern": "^=" }
//!     ]
//! }
//! ```
//!
//! Context restrictions are expressed declaratively: `after` lists previous
//! tags a pattern requires, `not_after` lists tags it refuses; at most one of
//! the two may be given. Custom tags have no string form, so JSON definitions
//! are limited to the common tag set.

use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::{PatternTable, TableBuilder};
use serde::Deserialize;

/// One pattern of a JSON language definition.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDef {
    /// Tag name, one of the common set (`"keyword"`, `"comment"`, ...)
    pub tag: String,
    /// Anchored regex source
    pub pattern: String,
    /// Acceptable first characters (fast-reject hint)
    #[serde(default)]
    pub leading: Option<String>,
    /// Language id whose rules re-classify this pattern's matches
    #[serde(default)]
    pub embed: Option<String>,
    /// Previous tags this pattern requires
    #[serde(default)]
    pub after: Option<Vec<String>>,
    /// Previous tags this pattern refuses
    #[serde(default)]
    pub not_after: Option<Vec<String>>,
}

/// A complete JSON language definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageDef {
    /// Language identifier to register under
    pub id: String,
    /// File extensions claimed by this language
    #[serde(default)]
    pub file_extensions: Vec<String>,
    /// Shortcut patterns, in priority order
    #[serde(default)]
    pub shortcuts: Vec<PatternDef>,
    /// Fallthrough patterns, in priority order
    #[serde(default)]
    pub fallthroughs: Vec<PatternDef>,
    /// Languages whose fallthrough rules this one absorbs
    #[serde(default)]
    pub extends: Vec<String>,
}

impl PatternDef {
    fn compile(&self) -> Result<Pattern, Error> {
        let tag = StyleTag::parse(&self.tag).ok_or_else(|| Error::InvalidDefinition {
            message: format!("unknown style tag `{}`", self.tag),
        })?;

        let mut pattern = Pattern::regex(tag, &self.pattern)?;
        if let Some(leading) = &self.leading {
            pattern = pattern.leading(leading);
        }
        if let Some(embed) = &self.embed {
            pattern = pattern.embed(embed);
        }

        match (&self.after, &self.not_after) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidDefinition {
                    message: format!(
                        "pattern `{}` sets both `after` and `not_after`",
                        self.pattern
                    ),
                });
            }
            (Some(names), None) => {
                let allowed = parse_tags(names)?;
                pattern = pattern
                    .context(move |prev| prev.is_some_and(|tag| allowed.contains(&tag)));
            }
            (None, Some(names)) => {
                let refused = parse_tags(names)?;
                pattern = pattern
                    .context(move |prev| !prev.is_some_and(|tag| refused.contains(&tag)));
            }
            (None, None) => {}
        }

        Ok(pattern)
    }
}

fn parse_tags(names: &[String]) -> Result<Vec<StyleTag>, Error> {
    names
        .iter()
        .map(|name| {
            StyleTag::parse(name).ok_or_else(|| Error::InvalidDefinition {
                message: format!("unknown style tag `{}`", name),
            })
        })
        .collect()
}

impl LanguageDef {
    /// Deserialize a definition from JSON text.
    ///
    /// # Errors
    /// [`Error::InvalidDefinition`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidDefinition {
            message: e.to_string(),
        })
    }

    /// Compile the definition into a pattern table.
    ///
    /// # Errors
    /// [`Error::InvalidDefinition`] for unknown tag names or conflicting
    /// context restrictions; [`Error::InvalidPattern`] for regexes that do
    /// not compile.
    pub fn compile(&self) -> Result<PatternTable, Error> {
        let mut builder = TableBuilder::new();
        for def in &self.shortcuts {
            builder = builder.shortcut(def.compile()?);
        }
        for def in &self.fallthroughs {
            builder = builder.fallthrough(def.compile()?);
        }
        for extended in &self.extends {
            builder = builder.extend(extended);
        }
        Ok(builder.build())
    }
}

impl Registry {
    /// Compile and register a JSON language definition.
    ///
    /// # Errors
    /// Compilation errors as in [`LanguageDef::compile`], plus registration
    /// errors as in [`Registry::register`].
    pub fn register_definition(&mut self, def: &LanguageDef) -> Result<(), Error> {
        let table = def.compile()?;
        let extensions: Vec<&str> = def.file_extensions.iter().map(String::as_str).collect();
        self.register(&def.id, &extensions, table)
    }
}
