use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use graph_ancestry::problem::{write_answers, Problem};

/// Answers "is A an ancestor of B?" queries on a forest given by parent
/// links.
#[derive(Debug, Parser)]
#[command(name = "ancestor", version, about)]
struct Args {
    /// Read the problem from this file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write answers to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let problem = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Problem::read(file).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => Problem::read(io::stdin().lock()).context("failed to read stdin")?,
    };

    let answers = problem.solve()?;
    info!(
        vertices = problem.order(),
        queries = answers.len(),
        "answered queries"
    );

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    write_answers(BufWriter::new(out), &answers).context("failed to write answers")?;

    Ok(())
}
