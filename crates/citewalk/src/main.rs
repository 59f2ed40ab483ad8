//! citewalk - Collect `[CITATION]` provenance comments into a report
//!
//! citewalk scans a source tree for comment blocks in the form
//! `# [CITATION] Source: ...` / `Author:` / `Date:` / `Description:` and
//! writes a consolidated Markdown, HTML, or JSON report.

use citewalk::output::{OutputFormat, renderer_for};
use citewalk_core::{DEFAULT_IGNORE, Sources, WalkSources};
use clap::Parser;
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Extract and document [CITATION] comments found in code.
#[derive(Debug, Parser)]
#[command(name = "citewalk", version, about)]
struct Args {
    /// Directory to scan for citations
    #[arg(short = 'd', long, default_value = ".")]
    directory: PathBuf,

    /// Output file path for the generated report
    #[arg(short = 'o', long, default_value = "Documentation/citations.md")]
    output: PathBuf,

    /// Output format: markdown, html, or json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// File extension suffixes to scan, leading dot included
    #[arg(
        short = 'e',
        long = "extensions",
        num_args = 1..,
        default_values_t = [".py", ".js", ".ts", ".java", ".cs", ".cpp", ".c"].map(String::from)
    )]
    extensions: Vec<String>,

    /// Scan directories recursively (the default)
    #[arg(short = 'r', long, overrides_with = "no_recursive")]
    recursive: bool,

    /// Only consider files directly inside the scanned directory
    #[arg(long, overrides_with = "recursive")]
    no_recursive: bool,

    /// Comma-separated path substrings to ignore
    #[arg(long, default_value_t = DEFAULT_IGNORE.join(","))]
    ignore: String,

    /// Only count citations without generating an output file
    #[arg(long)]
    count_only: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Configuration errors come first, before any scanning happens
    let Some(format) = OutputFormat::from_str(&args.format) else {
        eyre::bail!(
            "Unsupported output format: {}. Supported formats: markdown, html, json",
            args.format
        );
    };

    if !args.directory.is_dir() {
        eyre::bail!("Directory not found: {}", args.directory.display());
    }

    let ignore_patterns: Vec<String> = args
        .ignore
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    let recursive = !args.no_recursive;

    tracing::debug!(
        directory = %args.directory.display(),
        output = %args.output.display(),
        format = format.as_str(),
        extensions = ?args.extensions,
        recursive,
        ignore = ?ignore_patterns,
        "starting citation scan"
    );

    eprintln!(
        "{} Scanning {}...",
        "->".blue().bold(),
        args.directory.display()
    );

    let scan = WalkSources::new(&args.directory)
        .extensions(args.extensions)
        .recursive(recursive)
        .ignore(ignore_patterns)
        .scan()?;

    if scan.is_empty() {
        println!("No citations found in the specified directory.");
        return Ok(());
    }

    println!(
        "Found {} citations in {} files.",
        scan.total_citations().to_string().green(),
        scan.len().to_string().green()
    );

    if args.count_only {
        if args.verbose {
            println!("\nCitation breakdown by file:");
            for file in &scan.files {
                println!("  {}: {} citations", file.path.display(), file.citations.len());
            }
        }
        return Ok(());
    }

    let renderer = renderer_for(format);
    if renderer.render(&scan, &args.output) {
        println!(
            "Citations documentation generated successfully: {}",
            args.output.display()
        );
        Ok(())
    } else {
        eprintln!("Failed to generate citations documentation.");
        std::process::exit(1);
    }
}
