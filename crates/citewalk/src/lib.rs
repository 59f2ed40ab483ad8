//! citewalk - Collect `[CITATION]` provenance comments into a report
//!
//! This library exposes the report renderers for testing and embedding
//! purposes; the scanning itself lives in `citewalk-core`.

pub mod output;
