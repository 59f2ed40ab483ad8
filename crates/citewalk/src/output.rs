//! Report renderers for scan results
//!
//! One renderer per output format, selected once up front. Markdown and HTML
//! omit absent fields; JSON renders them as empty strings. That asymmetry is
//! part of the report format contract and is covered by tests.

use citewalk_core::{CitationField, ScanResult};
use serde::Serialize;
use std::path::Path;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// Renders a scan result into a report file
pub trait Renderer {
    /// Produce the report document
    fn render_to_string(&self, scan: &ScanResult) -> String;

    /// Write the report to `output`. Returns `false` without writing when
    /// the scan is empty, and `false` when the file cannot be written; the
    /// caller decides whether that is fatal.
    fn render(&self, scan: &ScanResult, output: &Path) -> bool {
        if scan.is_empty() {
            return false;
        }
        let document = self.render_to_string(scan);
        match std::fs::write(output, document) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(output = %output.display(), %err, "failed to write report");
                false
            }
        }
    }
}

/// Select the renderer for a format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Fields in report order, shared by all formats
const FIELD_ORDER: [CitationField; 4] = CitationField::ALL;

fn field_label(field: CitationField) -> &'static str {
    field.keyword().trim_end_matches(':')
}

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_to_string(&self, scan: &ScanResult) -> String {
        let mut out = String::new();
        out.push_str("# Code Citations\n\n");

        for file in &scan.files {
            out.push_str(&format!("## {}\n\n", file.path.display()));

            for (i, citation) in file.citations.iter().enumerate() {
                out.push_str(&format!("### Citation {}\n\n", i + 1));

                for field in FIELD_ORDER {
                    if let Some(value) = citation.get(field) {
                        out.push_str(&format!("- **{}**: {}\n", field_label(field), value));
                    }
                }

                out.push('\n');
            }
        }

        out
    }
}

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_to_string(&self, scan: &ScanResult) -> String {
        let mut out = String::new();
        out.push_str(
            "<!DOCTYPE html>\n\
             <html lang='en'>\n\
             <head>\n\
             \x20   <meta charset='UTF-8'>\n\
             \x20   <meta name='viewport' content='width=device-width, initial-scale=1.0'>\n\
             \x20   <title>Code Citations</title>\n\
             \x20   <style>\n\
             \x20       body { font-family: Arial, sans-serif; margin: 40px; }\n\
             \x20       h1 { color: #333; border-bottom: 2px solid #333; }\n\
             \x20       h2 { color: #666; border-bottom: 1px solid #ccc; }\n\
             \x20       h3 { color: #888; }\n\
             \x20       ul { list-style-type: none; padding-left: 0; }\n\
             \x20       li { margin: 5px 0; }\n\
             \x20       strong { color: #333; }\n\
             \x20       .citation { margin-bottom: 20px; }\n\
             \x20   </style>\n\
             </head>\n\
             <body>\n\
             \x20   <h1>Code Citations</h1>\n",
        );

        for file in &scan.files {
            out.push_str(&format!("    <h2>{}</h2>\n", file.path.display()));

            for (i, citation) in file.citations.iter().enumerate() {
                out.push_str("    <div class='citation'>\n");
                out.push_str(&format!("        <h3>Citation {}</h3>\n", i + 1));
                out.push_str("        <ul>\n");

                for field in FIELD_ORDER {
                    if let Some(value) = citation.get(field) {
                        // Values are interpolated verbatim, without HTML
                        // escaping, to keep reports byte-compatible with
                        // earlier report generations
                        out.push_str(&format!(
                            "            <li><strong>{}</strong> {}</li>\n",
                            field.keyword(),
                            value
                        ));
                    }
                }

                out.push_str("        </ul>\n    </div>\n");
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonReport {
    title: &'static str,
    generated_at: Option<String>,
    files: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct JsonFile {
    citation_count: usize,
    citations: Vec<JsonCitation>,
}

/// Citation entry in the JSON format. Absent fields become empty strings
/// here, unlike Markdown and HTML which omit them.
#[derive(Serialize)]
struct JsonCitation {
    id: usize,
    source: String,
    author: String,
    date: String,
    description: String,
}

impl Renderer for JsonRenderer {
    fn render_to_string(&self, scan: &ScanResult) -> String {
        let mut files = serde_json::Map::new();

        for file in &scan.files {
            let citations = file
                .citations
                .iter()
                .enumerate()
                .map(|(i, citation)| JsonCitation {
                    id: i + 1,
                    source: citation.source.clone().unwrap_or_default(),
                    author: citation.author.clone().unwrap_or_default(),
                    date: citation.date.clone().unwrap_or_default(),
                    description: citation.description.clone().unwrap_or_default(),
                })
                .collect();

            let entry = JsonFile {
                citation_count: file.citations.len(),
                citations,
            };
            files.insert(
                file.path.display().to_string(),
                serde_json::to_value(entry).expect("JSON file entry serializes"),
            );
        }

        let report = JsonReport {
            title: "Code Citations",
            generated_at: None,
            files,
        };

        serde_json::to_string_pretty(&report).expect("JSON report serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citewalk_core::Citation;

    fn sample_scan() -> ScanResult {
        let mut scan = ScanResult::new();
        scan.push(
            "test.py",
            vec![Citation {
                source: Some("https://example.com/test".into()),
                author: Some("Test Author".into()),
                date: Some("2025-01-01".into()),
                description: None,
            }],
        );
        scan.push(
            "sub/x.js",
            vec![
                Citation {
                    source: Some("https://example.com/one".into()),
                    ..Default::default()
                },
                Citation {
                    source: Some("https://example.com/two".into()),
                    author: Some("Second Author".into()),
                    ..Default::default()
                },
            ],
        );
        scan
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("markdown"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_str("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_str("HTML"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("pdf"), None);
    }

    #[test]
    fn test_markdown_layout() {
        let doc = MarkdownRenderer.render_to_string(&sample_scan());
        assert!(doc.starts_with("# Code Citations\n\n"));
        assert!(doc.contains("## test.py\n\n### Citation 1\n\n"));
        assert!(doc.contains("- **Source**: https://example.com/test\n"));
        assert!(doc.contains("- **Author**: Test Author\n"));
        assert!(doc.contains("- **Date**: 2025-01-01\n"));
        // Absent fields are omitted, not rendered empty
        assert!(!doc.contains("**Description**"));
        // Citations are numbered per file
        assert!(doc.contains("## sub/x.js"));
        assert!(doc.contains("### Citation 2"));
    }

    #[test]
    fn test_markdown_field_order() {
        let mut scan = ScanResult::new();
        scan.push(
            "a.py",
            vec![Citation {
                source: Some("S".into()),
                author: Some("A".into()),
                date: Some("D".into()),
                description: Some("X".into()),
            }],
        );
        let doc = MarkdownRenderer.render_to_string(&scan);
        let positions: Vec<usize> = ["**Source**", "**Author**", "**Date**", "**Description**"]
            .iter()
            .map(|needle| doc.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_html_layout() {
        let doc = HtmlRenderer.render_to_string(&sample_scan());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Code Citations</title>"));
        assert!(doc.contains("<h2>test.py</h2>"));
        assert!(doc.contains("<div class='citation'>"));
        assert!(doc.contains("<h3>Citation 1</h3>"));
        assert!(doc.contains("<li><strong>Source:</strong> https://example.com/test</li>"));
        assert!(doc.contains("<li><strong>Author:</strong> Test Author</li>"));
        assert!(!doc.contains("<strong>Description:</strong>"));
        assert!(doc.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_html_values_unescaped() {
        let mut scan = ScanResult::new();
        scan.push(
            "a.py",
            vec![Citation {
                source: Some("a < b & \"c\"".into()),
                ..Default::default()
            }],
        );
        let doc = HtmlRenderer.render_to_string(&scan);
        assert!(doc.contains("a < b & \"c\""));
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = JsonRenderer.render_to_string(&sample_scan());
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();

        assert_eq!(value["title"], "Code Citations");
        assert!(value["generated_at"].is_null());

        let files = value["files"].as_object().unwrap();
        assert_eq!(files.len(), 2);

        for file in files.values() {
            let citations = file["citations"].as_array().unwrap();
            assert_eq!(
                file["citation_count"].as_u64().unwrap() as usize,
                citations.len()
            );
            for (i, citation) in citations.iter().enumerate() {
                assert_eq!(citation["id"].as_u64().unwrap() as usize, i + 1);
                // Every citation has all four keys, absent fields included
                for key in ["source", "author", "date", "description"] {
                    assert!(citation[key].is_string(), "missing key {key}");
                }
            }
        }

        // Missing fields are empty strings in JSON only
        let first = &files["test.py"]["citations"][0];
        assert_eq!(first["description"], "");
        assert_eq!(first["source"], "https://example.com/test");
    }

    #[test]
    fn test_empty_scan_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("citations.md");
        let ok = MarkdownRenderer.render(&ScanResult::new(), &output);
        assert!(!ok);
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_reports_false() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing-dir").join("citations.md");
        let ok = MarkdownRenderer.render(&sample_scan(), &output);
        assert!(!ok);
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("citations.json");
        let ok = renderer_for(OutputFormat::Json).render(&sample_scan(), &output);
        assert!(ok);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"citation_count\": 1"));
    }
}
