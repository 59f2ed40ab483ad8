//! Line-oriented matcher for `[CITATION]` comment markers
//!
//! Recognizes one field per matched pattern on a single physical line. The
//! marker must be introduced by a comment leader; values never span lines,
//! so block comments need the marker repeated on every line.

use crate::citation::CitationField;

/// The literal tag identifying a citation line
const MARKER: &str = "[CITATION]";

/// Comment leaders that may introduce the marker. `*` covers continuation
/// lines inside multi-line C-style comments; `--` covers SQL and Haskell.
const COMMENT_LEADERS: [&str; 6] = ["//", "#", "/*", "*", "<!--", "--"];

/// Closing delimiters that terminate a value before end of line
const CLOSERS: [&str; 2] = ["*/", "-->"];

/// Match every field pattern against one line.
///
/// Each of the four field kinds is tried independently, in the fixed order
/// Source, Author, Date, Description; an earlier match never suppresses a
/// later kind. Well-formed input carries one field per line, but nothing
/// here enforces that.
pub fn match_line(line: &str) -> Vec<(CitationField, String)> {
    CitationField::ALL
        .into_iter()
        .filter_map(|field| match_field(line, field).map(|value| (field, value)))
        .collect()
}

/// Match a single field pattern against a line, returning the trimmed value.
///
/// The value runs from the field keyword to the earliest of `*/`, `-->`, or
/// end of line. A keyword with nothing after its colon is not a match.
fn match_field(line: &str, field: CitationField) -> Option<String> {
    let mut from = 0;
    while let Some(found) = line[from..].find(MARKER) {
        let at = from + found;
        from = at + MARKER.len();

        if !has_comment_leader(&line[..at]) {
            continue;
        }

        let rest = line[at + MARKER.len()..].trim_start();
        let Some(raw) = rest.strip_prefix(field.keyword()) else {
            continue;
        };
        let raw = clip_at_closer(raw);
        if raw.is_empty() {
            continue;
        }
        return Some(raw.trim().to_string());
    }
    None
}

/// Whether the text before the marker ends with a comment leader
fn has_comment_leader(before: &str) -> bool {
    let before = before.trim_end();
    COMMENT_LEADERS.iter().any(|leader| before.ends_with(leader))
}

/// Cut the value off at the first closing comment delimiter, if any
fn clip_at_closer(raw: &str) -> &str {
    let end = CLOSERS
        .iter()
        .filter_map(|closer| raw.find(closer))
        .min()
        .unwrap_or(raw.len());
    &raw[..end]
}
