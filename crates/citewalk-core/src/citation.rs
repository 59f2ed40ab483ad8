//! Citation records and scan results

use serde::Serialize;
use std::path::{Path, PathBuf};

/// The field kinds a citation line can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CitationField {
    /// URL or reference the code was taken from
    Source,
    /// Author of the referenced material
    Author,
    /// Date string, free-form
    Date,
    /// What was referenced and why
    Description,
}

impl CitationField {
    /// All field kinds in matching order. Source comes first because a
    /// `Source:` line is what opens and closes records.
    pub const ALL: [CitationField; 4] = [
        CitationField::Source,
        CitationField::Author,
        CitationField::Date,
        CitationField::Description,
    ];

    /// The keyword introducing this field's value, colon included
    pub fn keyword(&self) -> &'static str {
        match self {
            CitationField::Source => "Source:",
            CitationField::Author => "Author:",
            CitationField::Date => "Date:",
            CitationField::Description => "Description:",
        }
    }

    /// Parse a field from its lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "source" => Some(CitationField::Source),
            "author" => Some(CitationField::Author),
            "date" => Some(CitationField::Date),
            "description" => Some(CitationField::Description),
            _ => None,
        }
    }

    /// Get the lowercase name of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationField::Source => "source",
            CitationField::Author => "author",
            CitationField::Date => "date",
            CitationField::Description => "description",
        }
    }
}

impl std::fmt::Display for CitationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One provenance record assembled from a block of citation lines
///
/// Only records with a `source` are ever emitted; the other three fields are
/// optional extras.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub source: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Citation {
    /// Set a field, overwriting any previous value
    pub fn set(&mut self, field: CitationField, value: String) {
        match field {
            CitationField::Source => self.source = Some(value),
            CitationField::Author => self.author = Some(value),
            CitationField::Date => self.date = Some(value),
            CitationField::Description => self.description = Some(value),
        }
    }

    /// Get a field value, if present
    pub fn get(&self, field: CitationField) -> Option<&str> {
        match field {
            CitationField::Source => self.source.as_deref(),
            CitationField::Author => self.author.as_deref(),
            CitationField::Date => self.date.as_deref(),
            CitationField::Description => self.description.as_deref(),
        }
    }

    /// Whether the record qualifies for emission
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }
}

/// Citations found in one file, keyed by the path relative to the scan root
#[derive(Debug, Clone, Serialize)]
pub struct FileCitations {
    pub path: PathBuf,
    pub citations: Vec<Citation>,
}

/// Collection of per-file citation lists produced by one scan
///
/// Entries appear in traversal order. Files without citations are never
/// present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub files: Vec<FileCitations>,
}

impl ScanResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files with at least one citation
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file carried any citation
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of citations across all files
    pub fn total_citations(&self) -> usize {
        self.files.iter().map(|f| f.citations.len()).sum()
    }

    /// Look up the citations for a file path
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[Citation]> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.citations.as_slice())
    }

    /// Record a file's citations. Empty lists are dropped so that files
    /// without citations never show up in reports.
    pub fn push(&mut self, path: impl Into<PathBuf>, citations: Vec<Citation>) {
        if citations.is_empty() {
            return;
        }
        self.files.push(FileCitations {
            path: path.into(),
            citations,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_roundtrip() {
        for field in CitationField::ALL {
            assert_eq!(CitationField::parse(field.as_str()), Some(field));
        }
        assert_eq!(CitationField::parse("license"), None);
    }

    #[test]
    fn field_display() {
        assert_eq!(CitationField::Source.to_string(), "source");
        assert_eq!(CitationField::Description.to_string(), "description");
    }

    #[test]
    fn set_overwrites() {
        let mut citation = Citation::default();
        citation.set(CitationField::Author, "First".into());
        citation.set(CitationField::Author, "Second".into());
        assert_eq!(citation.author.as_deref(), Some("Second"));
    }

    #[test]
    fn empty_file_lists_are_dropped() {
        let mut scan = ScanResult::new();
        scan.push("empty.py", Vec::new());
        assert!(scan.is_empty());
        assert_eq!(scan.get("empty.py"), None);
    }

    #[test]
    fn push_preserves_order() {
        let mut scan = ScanResult::new();
        let citation = Citation {
            source: Some("https://example.com".into()),
            ..Default::default()
        };
        scan.push("b.py", vec![citation.clone()]);
        scan.push("a.py", vec![citation.clone(), citation]);
        assert_eq!(scan.len(), 2);
        assert_eq!(scan.files[0].path, Path::new("b.py"));
        assert_eq!(scan.total_citations(), 3);
    }
}
