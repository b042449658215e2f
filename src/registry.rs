//! Language registry
//!
//! The [`Registry`] owns every registered language: it maps identifiers and
//! file extensions to pattern tables, resolves extension composition when a
//! table is registered, and statically rejects cyclic embed references so
//! classification can never recurse without bound.
//!
//! Registries are populated once during initialization and treated as
//! read-only afterward; tables are handed out in `Arc`s and shared freely
//! across threads for concurrent classification.

use crate::classifier::classify;
use crate::composer::compose;
use crate::error::Error;
use crate::pattern::Pattern;
use crate::table::PatternTable;
use crate::token::Token;
use ahash::RandomState;
use hashbrown::{HashMap, HashSet};
use std::sync::Arc;

/// Maps language identifiers and file extensions to pattern tables.
#[derive(Debug, Default)]
pub struct Registry {
    /// Effective (extension-flattened) tables by language id
    tables: HashMap<String, Arc<PatternTable>, RandomState>,
    /// File extension to language id
    by_extension: HashMap<String, String, RandomState>,
    /// Embed reference edges, for cycle rejection
    embeds: HashMap<String, Vec<String>, RandomState>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register `table` under `id`, claiming `file_extensions`.
    ///
    /// The table's `extended` references are resolved now: each named
    /// language must already be registered, and its fallthrough rules are
    /// appended to this table's fallthrough list in declaration order.
    ///
    /// Idempotent per id; the last registration wins.
    ///
    /// # Errors
    /// [`Error::UnknownLanguage`] if an extended language is not yet
    /// registered; [`Error::CompositionCycle`] if this registration would
    /// close a cycle of embed references.
    pub fn register(
        &mut self,
        id: &str,
        file_extensions: &[&str],
        table: PatternTable,
    ) -> Result<(), Error> {
        // Resolve extension composition against already-registered tables.
        // Extension cycles are impossible by construction: a reference to a
        // not-yet-registered language fails here, and flattening leaves no
        // reference behind.
        let mut absorbed: Vec<Pattern> = Vec::new();
        for extended in table.extended() {
            let donor = self.tables.get(extended).ok_or_else(|| Error::UnknownLanguage {
                language: extended.clone(),
            })?;
            absorbed.extend(donor.fallthroughs().iter().cloned());
        }
        let effective = table.flatten_with(absorbed);

        // Embed references may point at languages registered later, so the
        // graph is re-checked on every registration; a cycle necessarily
        // closes at the registration of its last member.
        let edges: Vec<String> = effective
            .embedded_languages()
            .into_iter()
            .map(str::to_string)
            .collect();
        let previous_edges = self.embeds.insert(id.to_string(), edges);
        if let Some(path) = self.find_cycle(id) {
            // Leave the registry as it was before this call
            match previous_edges {
                Some(edges) => self.embeds.insert(id.to_string(), edges),
                None => self.embeds.remove(id),
            };
            return Err(Error::CompositionCycle { path });
        }

        self.tables.insert(id.to_string(), Arc::new(effective));
        for extension in file_extensions {
            self.by_extension
                .insert((*extension).to_string(), id.to_string());
        }
        Ok(())
    }

    /// Resolve a language id or file extension to a registered id.
    ///
    /// Ids take precedence over extensions.
    ///
    /// # Errors
    /// [`Error::UnknownLanguage`] if neither maps.
    pub fn resolve(&self, extension_or_id: &str) -> Result<&str, Error> {
        if let Some((id, _)) = self.tables.get_key_value(extension_or_id) {
            return Ok(id);
        }
        self.by_extension
            .get(extension_or_id)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownLanguage {
                language: extension_or_id.to_string(),
            })
    }

    /// The effective table registered under `id`.
    ///
    /// # Errors
    /// [`Error::UnknownLanguage`] if `id` is not registered.
    pub fn table(&self, id: &str) -> Result<Arc<PatternTable>, Error> {
        self.tables
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownLanguage {
                language: id.to_string(),
            })
    }

    /// Classify `text` under the language named by `language` (an id or a
    /// file extension), composing embedded regions.
    ///
    /// The returned tokens cover `[0, text.len())` with no gaps or overlaps.
    ///
    /// # Errors
    /// [`Error::UnknownLanguage`] for an unregistered language or embed
    /// target; [`Error::ZeroWidthMatch`] for a defective pattern.
    pub fn classify<'s>(&self, language: &str, text: &'s str) -> Result<Vec<Token<'s>>, Error> {
        let id = self.resolve(language)?;
        let table = self.table(id)?;
        let spans = classify(&table, text)?;
        compose(self, spans)
    }

    /// Registered language ids, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Shortest embed-reference cycle through `start`, if one exists.
    fn find_cycle(&self, start: &str) -> Option<Vec<String>> {
        let mut stack: Vec<String> = Vec::new();
        let mut visited: HashSet<String, RandomState> = HashSet::default();
        self.visit(start, &mut stack, &mut visited)
    }

    fn visit(
        &self,
        node: &str,
        stack: &mut Vec<String>,
        visited: &mut HashSet<String, RandomState>,
    ) -> Option<Vec<String>> {
        if let Some(pos) = stack.iter().position(|n| n == node) {
            let mut path = stack[pos..].to_vec();
            path.push(node.to_string());
            return Some(path);
        }
        if !visited.insert(node.to_string()) {
            return None;
        }
        stack.push(node.to_string());
        if let Some(edges) = self.embeds.get(node) {
            for next in edges {
                if let Some(path) = self.visit(next, stack, visited) {
                    return Some(path);
                }
            }
        }
        stack.pop();
        None
    }
}
