//! Source providers for citation extraction

use crate::assembler::extract_from_content;
use crate::citation::ScanResult;
use eyre::Result;
use std::path::PathBuf;

/// Extension suffixes scanned when no explicit list is configured.
///
/// Matching is a case-sensitive suffix check against the file name, leading
/// dot included.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // Programming languages
    ".py", ".js", ".ts", ".java", ".cs", ".cpp", ".c", ".go", ".rb", ".php",
    // Web files
    ".html", ".xml", ".css", ".svg",
    // Data/config files
    ".sql", ".json", ".yaml", ".yml",
    // Documentation
    ".md", ".rst",
];

/// Ignore substrings most scans want. The walker itself defaults to no
/// ignores; callers opt in to this list.
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", ".git", "__pycache__", "dist", "build"];

/// Trait for providing source files to extract citations from
pub trait Sources {
    /// Scan all sources and collect citations per file
    fn scan(self) -> Result<ScanResult>;
}

/// In-memory sources (useful for testing)
pub struct MemorySources(Vec<(PathBuf, String)>);

impl MemorySources {
    /// Create empty memory sources
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a file with content
    pub fn add(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.0.push((path.into(), content.into()));
        self
    }
}

impl Default for MemorySources {
    fn default() -> Self {
        Self::new()
    }
}

impl Sources for MemorySources {
    fn scan(self) -> Result<ScanResult> {
        let mut scan = ScanResult::new();
        for (path, content) in self.0 {
            scan.push(path, extract_from_content(&content));
        }
        Ok(scan)
    }
}

/// Directory walker with extension and ignore-substring filtering
///
/// Ignore patterns are plain substrings matched against the full path, not
/// globs. Matching directories are pruned before descent, so their contents
/// are never visited.
#[cfg(feature = "walk")]
pub struct WalkSources {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
    ignore: Vec<String>,
}

#[cfg(feature = "walk")]
impl WalkSources {
    /// Create a recursive walker over the given root with
    /// [`DEFAULT_EXTENSIONS`] and no ignore patterns
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            recursive: true,
            ignore: Vec::new(),
        }
    }

    /// Replace the extension suffix list (e.g. `[".rs", ".toml"]`)
    pub fn extensions(mut self, suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extensions = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether subdirectories are entered. Non-recursive mode considers
    /// only the immediate children of the root.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Add ignore substrings (e.g. `["node_modules", ".git"]`)
    pub fn ignore(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }
}

#[cfg(feature = "walk")]
impl Sources for WalkSources {
    fn scan(self) -> Result<ScanResult> {
        use ignore::WalkBuilder;

        let mut scan = ScanResult::new();

        // A missing root is zero results, not an error
        if !self.root.is_dir() {
            return Ok(scan);
        }

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if !self.recursive {
            builder.max_depth(Some(1));
        }

        if !self.ignore.is_empty() {
            // Pruning here keeps the walker out of ignored subtrees entirely
            let patterns = self.ignore.clone();
            builder.filter_entry(move |entry| !is_ignored_path(&entry.path().to_string_lossy(), &patterns));
        }

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            if !matches_extension(path, &self.extensions) {
                continue;
            }

            // A file that cannot be read as text is skipped; the scan goes on
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable file");
                    continue;
                }
            };

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            scan.push(relative, extract_from_content(&content));
        }

        Ok(scan)
    }
}

/// Substring containment check used for both files and directories
#[cfg(feature = "walk")]
fn is_ignored_path(path: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && path.contains(pattern.as_str()))
}

/// Suffix match against the file name, case-sensitive
#[cfg(feature = "walk")]
fn matches_extension(path: &std::path::Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
