//! Composer: splicing embedded sub-language regions
//!
//! Some patterns flag their matches as "this region's text is written in
//! another language" (a string holding markup, a script block holding another
//! grammar). [`compose`] resolves each flagged span's language through the
//! registry, re-classifies the span's text under that table, and splices the
//! sub-tokens into the parent stream in place, remapped into parent
//! coordinates. Neighboring tokens are untouched and the spliced text always
//! reconstructs the flagged span exactly.
//!
//! Nesting is unbounded by the algorithm itself; the registry rejects cyclic
//! reference sets at registration time, so recursion depth is bounded by the
//! (acyclic) language reference graph.

use crate::classifier::{classify, Classified};
use crate::error::Error;
use crate::registry::Registry;
use crate::token::Token;

/// Resolve embed flags in `spans`, returning the final token stream.
///
/// Spans without a flag pass through unchanged. For a flagged span, the
/// sub-tokens of `classify(embedded table, span.text)` replace the span, each
/// remapped by the span's start offset; sub-spans flagged in turn recurse.
///
/// # Errors
/// [`Error::UnknownLanguage`] if a flagged language was never registered;
/// [`Error::ZeroWidthMatch`] propagated from nested classification.
pub fn compose<'s>(
    registry: &Registry,
    spans: Vec<Classified<'s>>,
) -> Result<Vec<Token<'s>>, Error> {
    let mut out = Vec::with_capacity(spans.len());
    splice_into(registry, spans, 0, &mut out)?;
    Ok(out)
}

/// Append `spans` to `out`, shifted by `base`, recursing into embeds.
fn splice_into<'s>(
    registry: &Registry,
    spans: Vec<Classified<'s>>,
    base: usize,
    out: &mut Vec<Token<'s>>,
) -> Result<(), Error> {
    for span in spans {
        match span.embed {
            None => out.push(span.token.offset_by(base)),
            Some(language) => {
                let table = registry.table(&language)?;
                let sub = classify(&table, span.token.text)?;
                splice_into(registry, sub, base + span.token.start, out)?;
            }
        }
    }
    Ok(())
}
