//! CLI tool to turn a requirements CSV export into a sorted Markdown table.
//!
//! Usage:
//!   reqsort [input.csv] [-o output.md] [-c reqsort.toml] [-v...]
//!
//! `-o -` writes the document to stdout. `--title`, `--skip-lines`, and
//! `--strip` override the matching config settings.

use clap::Parser;
use reqsort::logging::init_logging;
use reqsort::{Conversion, PipelineConfig, ReqSortError, convert_file, write_document};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Convert a requirements export into a sorted Markdown document.
#[derive(Parser)]
#[command(name = "reqsort", version)]
struct Cli {
    /// Requirements export (two metadata lines, then CSV rows)
    #[arg(default_value = "requirements_specification.csv")]
    input: PathBuf,

    /// Output document, or `-` for stdout
    #[arg(short, long, default_value = "REQUIREMENTS_SORTED.md")]
    output: PathBuf,

    /// TOML file overriding the default pipeline settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document heading
    #[arg(long)]
    title: Option<String>,

    /// Metadata lines to skip before the CSV rows
    #[arg(long)]
    skip_lines: Option<usize>,

    /// Boilerplate to remove from card text (repeatable, replaces the configured list)
    #[arg(long = "strip", value_name = "PATTERN")]
    strip_patterns: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(conversion) => report(&conversion, &cli.output),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn build_config(cli: &Cli) -> Result<PipelineConfig, ReqSortError> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(title) = &cli.title {
        config = config.with_title(title.as_str());
    }
    if let Some(n) = cli.skip_lines {
        config = config.with_skip_lines(n);
    }
    if !cli.strip_patterns.is_empty() {
        config = config.with_strip_patterns(&cli.strip_patterns);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<Conversion, ReqSortError> {
    let config = build_config(cli)?;

    let conversion = convert_file(&cli.input, &config)?;

    if cli.output == Path::new("-") {
        io::stdout()
            .write_all(conversion.document.as_bytes())
            .map_err(|source| ReqSortError::WriteOutput {
                path: cli.output.clone(),
                source,
            })?;
    } else {
        write_document(&cli.output, &conversion.document)?;
    }

    Ok(conversion)
}

fn report(conversion: &Conversion, output: &Path) {
    eprintln!("Sorted {} requirements.", conversion.record_count());
    if output != Path::new("-") {
        eprintln!("File saved as: {}", output.display());
    }
    if let Some(order) = conversion.example_order() {
        eprintln!("Example Order: {order}");
    }
}
