//! Assembles matched field lines into citation records
//!
//! Citation blocks are contiguous comment groups, but the grouping rule does
//! not rely on blank lines: a new `Source:` field is what closes the record
//! being built and opens the next one. Any other field simply attaches to
//! the open record, so ordinary code lines between fields are harmless.

use crate::citation::{Citation, CitationField};
use crate::matcher::match_line;

/// Accumulates fields into the record currently being built.
///
/// The builder holds at most one pending record. Transitions:
/// - [`on_source`](Self::on_source) closes a pending record that already has
///   a source and starts a new one;
/// - [`on_field`](Self::on_field) sets a non-source field on the pending
///   record, last occurrence winning;
/// - [`finish`](Self::finish) emits the pending record only if it gained a
///   source.
#[derive(Debug, Default)]
pub struct CitationBuilder {
    pending: Option<Citation>,
}

impl CitationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a `Source:` field. Returns the record this closes, if any.
    pub fn on_source(&mut self, value: String) -> Option<Citation> {
        let closed = match &self.pending {
            Some(pending) if pending.has_source() => self.pending.take(),
            _ => None,
        };
        self.pending
            .get_or_insert_with(Citation::default)
            .set(CitationField::Source, value);
        closed
    }

    /// Handle a non-source field. Fields seen before the first `Source:`
    /// stay on the pending record and merge into the record that source
    /// eventually starts.
    pub fn on_field(&mut self, field: CitationField, value: String) {
        debug_assert_ne!(field, CitationField::Source);
        self.pending
            .get_or_insert_with(Citation::default)
            .set(field, value);
    }

    /// End of input: emit the open record if it has a source, drop it
    /// otherwise.
    pub fn finish(self) -> Option<Citation> {
        self.pending.filter(Citation::has_source)
    }
}

/// Extract all citation records from a file's text, in scan order.
pub fn extract_from_content(content: &str) -> Vec<Citation> {
    let mut citations = Vec::new();
    let mut builder = CitationBuilder::new();

    for line in content.lines() {
        for (field, value) in match_line(line) {
            match field {
                CitationField::Source => {
                    if let Some(closed) = builder.on_source(value) {
                        citations.push(closed);
                    }
                }
                _ => builder.on_field(field, value),
            }
        }
    }

    citations.extend(builder.finish());
    citations
}
