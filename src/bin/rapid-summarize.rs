//! rapid-summarize CLI
//!
//! Reads a text file (or stdin), picks the most central sentences and prints
//! them.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rapid_summarize::input::{parse_sentence_count, prepare_text};
use rapid_summarize::{Centrality, Summarizer, SummarizerConfig};

/// Extractive text summarization by sentence centrality.
#[derive(Parser)]
#[command(name = "rapid-summarize")]
#[command(author, version)]
#[command(about = "Pick the most central sentences of a text")]
struct Cli {
    /// Text file to summarize (stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Number of sentences in the summary
    #[arg(short = 'n', long, default_value = "3", value_parser = parse_count)]
    sentences: usize,

    /// Stopword language code (overrides the config file)
    #[arg(long)]
    language: Option<String>,

    /// Centrality measure: row-sum or page-rank (overrides the config file)
    #[arg(long)]
    centrality: Option<Centrality>,

    /// JSON file with summarizer settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the selected sentences and scores as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_count(s: &str) -> Result<usize, String> {
    parse_sentence_count(s).map_err(|e| e.to_string())
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn load_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Could not load config {}", path.display()))?;
            SummarizerConfig::from_json(&json)?
        }
        None => SummarizerConfig::default(),
    };
    if let Some(language) = &cli.language {
        config = config.with_language(language.clone());
    }
    if let Some(centrality) = cli.centrality {
        config = config.with_centrality(centrality);
    }
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not load file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Could not read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = load_config(&cli)?;
    let raw = read_input(cli.file.as_deref())?;
    let text = prepare_text(&raw)?;

    let summarizer = Summarizer::with_config(&config)?;
    let summary = summarizer
        .summarize_detailed(text, cli.sentences)
        .context("Error during summarization")?;

    tracing::info!(
        sentences = summary.total_sentences,
        selected = summary.sentences.len(),
        short_circuited = summary.short_circuited,
        "summary ready"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.text);
    }
    Ok(())
}
