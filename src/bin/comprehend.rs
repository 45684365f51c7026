//! `comprehend` - extract Java classes and methods from a project as JSON

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use comprehender_core::project::{ProjectConfig, ProjectExtractor, SkippedFile};
use comprehender_core::utils::file_utils::read_file_content;
use comprehender_core::utils::paths::generate_namespace;
use comprehender_core::views::{self, View};
use comprehender_core::{ExtractorManager, logging};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "comprehend",
    version,
    about = "Java structural extraction",
    long_about = "Extracts class and method declarations, with their inheritance, members and calls, from every Java file under a directory."
)]
struct Cli {
    /// Project root to scan
    #[arg(long, value_name = "DIR")]
    input_dir: PathBuf,

    /// Namespace recorded in the output (defaults to the input directory name)
    #[arg(long)]
    namespace: Option<String>,

    /// Which projection of the symbols to print
    #[arg(long, value_enum, default_value_t = Format::Symbols)]
    format: Format,

    /// Write JSON here instead of STDOUT
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Extra exclusion glob, matched against root-relative paths (repeatable)
    #[arg(long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Ignore the project's .comprehenderignore file
    #[arg(long)]
    no_ignore_file: bool,

    /// Extract files one at a time
    #[arg(long)]
    sequential: bool,

    /// Only syntax-check every discovered file; exits non-zero on errors
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Symbols,
    Docs,
    Classes,
    Index,
}

impl From<Format> for View {
    fn from(format: Format) -> Self {
        match format {
            Format::Symbols => View::Symbols,
            Format::Docs => View::Docs,
            Format::Classes => View::Classes,
            Format::Index => View::Index,
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    namespace: &'a str,
    format: String,
    skipped: &'a [SkippedFile],
    records: serde_json::Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut config = ProjectConfig::default();
    config.exclude.extend(cli.exclude.iter().cloned());
    config.use_ignore_file = !cli.no_ignore_file;
    config.parallel = !cli.sequential;

    let extractor = ProjectExtractor::with_config(&cli.input_dir, config);

    if cli.check {
        return check(&extractor);
    }

    let namespace = match &cli.namespace {
        Some(namespace) => namespace.clone(),
        None => generate_namespace(&cli.input_dir)
            .with_context(|| format!("cannot derive a namespace from '{}'", cli.input_dir.display()))?,
    };
    info!("Namespace: {}", namespace);

    let extraction = extractor
        .extract()
        .with_context(|| format!("failed to extract '{}'", cli.input_dir.display()))?;

    let view = View::from(cli.format);
    let output = Output {
        namespace: &namespace,
        format: view.to_string(),
        skipped: &extraction.skipped,
        records: views::to_value(&extraction.symbols, view)?,
    };
    let json = serde_json::to_string_pretty(&output)?;

    write_output(cli.output.as_deref(), &json)
}

/// Re-parse every discovered file and report syntax errors per line
fn check(extractor: &ProjectExtractor) -> Result<()> {
    let manager = ExtractorManager::new();
    let files = extractor.discover_files()?;
    let mut failing = 0usize;

    for path in &files {
        let content = match read_file_content(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let report = manager.check_syntax(&content)?;
        if !report.is_valid() {
            failing += 1;
            for line in &report.error_lines {
                println!("{}:{}: syntax error", path.display(), line);
            }
        }
    }

    info!("Checked {} files, {} with syntax errors", files.len(), failing);
    if failing > 0 {
        bail!("{} of {} files have syntax errors", failing, files.len());
    }
    Ok(())
}

fn write_output(output: Option<&Path>, json: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write '{}'", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
