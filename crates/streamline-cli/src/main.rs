//! CLI for streamline.
//!
//! Applies a configured chain of transforms to JSON-lines events read from a
//! file or stdin and writes the resulting events as JSON lines to stdout.
//! Logs go to stderr, filtered through `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use streamline_core::{Event, Transform, TransformDescriptor, TransformError};
use streamline_transforms::{TransformChain, TransformRegistry};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run JSON-lines events through the configured transforms
    Apply {
        /// Path to the pipeline configuration
        #[arg(long, env = "STREAMLINE_CONFIG")]
        config: PathBuf,

        /// Input file with one event per line (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the registered kinds and the configured transforms
    Describe {
        /// Path to the pipeline configuration
        #[arg(long, env = "STREAMLINE_CONFIG")]
        config: PathBuf,
    },
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct PipelineConfig {
    #[serde(default)]
    transforms: Vec<TransformDescriptor>,
}

impl PipelineConfig {
    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    fn build(&self, registry: &TransformRegistry) -> Result<TransformChain> {
        TransformChain::from_descriptors(registry, &self.transforms)
            .context("Failed to build transform chain")
    }
}

/// Parses one input line. A literal `null` is an absent event and reported
/// as invalid input, like an event without a field map.
fn parse_event(line: &str) -> Result<Event> {
    let value: Value = serde_json::from_str(line).context("Malformed JSON")?;
    if value.is_null() {
        return Err(TransformError::InvalidInput("event is null").into());
    }
    Ok(serde_json::from_value(value)?)
}

/// Feeds every non-blank line through `chain`, writing outputs to `out`.
/// Returns the number of (input, output) events.
fn process_lines(
    reader: impl BufRead,
    chain: &dyn Transform,
    mut out: impl Write,
) -> Result<(u64, u64)> {
    let mut read = 0;
    let mut written = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let event = parse_event(&line).with_context(|| format!("Line {line_no}"))?;
        read += 1;

        let outputs = chain
            .execute(&event)
            .with_context(|| format!("Line {line_no}: transform failed"))?;
        for output in outputs {
            serde_json::to_writer(&mut out, &output)?;
            out.write_all(b"\n")?;
            written += 1;
        }
    }

    out.flush()?;
    Ok((read, written))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let registry = TransformRegistry::with_builtins();

    match cli.command {
        Commands::Apply { config, input } => {
            let chain = PipelineConfig::load(&config)?.build(&registry)?;
            debug!(%chain, "pipeline ready");

            let reader: Box<dyn BufRead> = match &input {
                Some(p) => Box::new(BufReader::new(
                    File::open(p).with_context(|| format!("Failed to open {}", p.display()))?,
                )),
                None => Box::new(BufReader::new(io::stdin())),
            };

            let stdout = io::stdout();
            let (read, written) = process_lines(reader, &chain, BufWriter::new(stdout.lock()))?;
            info!(read, written, stages = chain.len(), "apply finished");
        }
        Commands::Describe { config } => {
            let chain = PipelineConfig::load(&config)?.build(&registry)?;
            println!("kinds: {}", registry.kinds().join(", "));
            for (i, stage) in chain.stages().enumerate() {
                println!("{i}: {stage}");
            }
        }
    }

    Ok(())
}
