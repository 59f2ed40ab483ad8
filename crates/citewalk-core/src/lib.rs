//! citewalk-core - Core library for code citation extraction
//!
//! This crate provides the building blocks for:
//! - Recognizing `[CITATION]` comment markers across comment syntaxes
//! - Assembling consecutive field lines into structured citation records
//! - Walking a source tree and collecting citations per file
//!
//! # Features
//!
//! - `walk` - Enable [`WalkSources`] for directory walking (brings in `ignore`)
//!
//! # Citation format
//!
//! A citation is a group of comment lines, each carrying the `[CITATION]`
//! marker and one field. Any of the common comment leaders work: `//`, `#`,
//! `/* */`, `*` continuation lines, `<!-- -->`, and `--`.
//!
//! ```text
//! # [CITATION] Source: https://example.com/resource
//! # [CITATION] Author: Example Author
//! # [CITATION] Date: 2025-06-05
//! # [CITATION] Description: Brief explanation of what was referenced
//! ```
//!
//! A new `Source:` line starts a new record; the other fields attach to the
//! record currently being built. Records without a source are dropped.
//!
//! # Scanning sources
//!
//! ```
//! use citewalk_core::{MemorySources, Sources};
//!
//! let scan = MemorySources::new()
//!     .add("foo.py", "# [CITATION] Source: https://example.com/a\n")
//!     .add("bar.py", "def no_citations(): pass\n")
//!     .scan()
//!     .unwrap();
//!
//! assert_eq!(scan.len(), 1);
//! assert_eq!(scan.total_citations(), 1);
//! ```
//!
//! Use [`WalkSources`] (feature `walk`, on by default) to scan a directory
//! tree with extension and ignore-substring filtering:
//!
//! ```ignore
//! use citewalk_core::{Sources, WalkSources};
//!
//! let scan = WalkSources::new(".")
//!     .extensions([".rs"])
//!     .ignore(["target"])
//!     .scan()?;
//! ```

mod assembler;
mod citation;
mod matcher;
mod sources;

pub use assembler::{CitationBuilder, extract_from_content};
pub use citation::{Citation, CitationField, FileCitations, ScanResult};
pub use matcher::match_line;
pub use sources::{DEFAULT_EXTENSIONS, DEFAULT_IGNORE, MemorySources, Sources};

#[cfg(feature = "walk")]
pub use sources::WalkSources;
