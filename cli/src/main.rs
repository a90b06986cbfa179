//! sm83-opgen CLI
//!
//! Reads an SM83 opcode dataset and prints the CB-prefixed table as Rust
//! struct literals.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use opgen_core::{generate, ident::is_valid_ident, RawDataset, RenderOptions};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "data/sm83-opcodes.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug output (for troubleshooting and development)
    #[arg(long, global = true)]
    debug: bool,
    /// Enable verbose output (traces every opcode entry)
    #[arg(long, global = true)]
    verbose: bool,
    /// Path to the opcode dataset (JSON)
    #[arg(long, short, value_name = "DATASET", default_value = DEFAULT_DATASET)]
    input: PathBuf,
    /// Write the generated source here instead of stdout
    #[arg(long, short, value_name = "OUT_PATH")]
    output: Option<PathBuf>,
    /// Wrap the literals in `pub const <NAME>: &[Opcode] = &[ .. ];`
    #[arg(long, value_name = "NAME", value_parser = parse_table_name)]
    table_name: Option<String>,
    /// Prepend the type definitions the literals refer to
    #[arg(long, default_value_t = false)]
    with_types: bool,
}

fn parse_table_name(name: &str) -> Result<String, String> {
    if is_valid_ident(name) {
        Ok(name.to_owned())
    } else {
        Err(format!("`{name}` is not a valid Rust identifier"))
    }
}

fn init_tracing(debug: bool, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);
    let options = RenderOptions {
        table_name: cli.table_name.clone(),
        with_types: cli.with_types,
    };
    let source = run(&cli.input, &options)?;
    write_output(cli.output.as_deref(), &source)
}

/// Loads the dataset and generates the source text.
///
/// Nothing is returned unless the whole table was generated.
fn run(input: &Path, options: &RenderOptions) -> anyhow::Result<String> {
    if !input.exists() {
        anyhow::bail!("dataset not found: {}", input.display());
    }
    let dataset = RawDataset::from_path(input)
        .with_context(|| format!("Failed to load dataset from {}", input.display()))?;
    debug!(entries = dataset.len(), path = %input.display(), "Dataset loaded");
    let source = generate(&dataset, options)
        .with_context(|| format!("Failed to generate opcode table from {}", input.display()))?;
    info!(entries = dataset.len(), "Generated opcode table");
    Ok(source)
}

fn write_output(output: Option<&Path>, source: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, source)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write output to stdout")
        }
    }
}
