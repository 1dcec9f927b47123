use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use midbst::{check_range, read_target, render, Tree};

/// Build a balanced BST over a range of integers, draw it, and trace a search
/// for a target through it.
#[derive(Parser, Debug)]
#[command(name = "midbst", version, about, long_about = None)]
struct Cli {
    /// Smallest value in the tree.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    low: i64,
    /// Largest value in the tree.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    high: i64,
    /// Value to search for. Read from stdin if not given.
    #[arg(short, long, allow_negative_numbers = true)]
    target: Option<i64>,
    /// Print a line when the target isn't in the tree.
    #[arg(long)]
    report_miss: bool,
    /// Refuse ranges holding more values than this.
    #[arg(long, default_value_t = 1 << 20)]
    max_nodes: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli, io::stdin().lock(), io::stdout().lock())
}

/// Draws the tree to `out`, then traces the search for the target, reading it
/// from `input` when it wasn't given on the command line.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut out: W) -> Result<()> {
    check_range(cli.low, cli.high, u128::from(cli.max_nodes))
        .context("refusing to build tree")?;
    let tree = Tree::build(cli.low, cli.high);

    writeln!(out, "Tree Structure:")?;
    for line in render(&tree) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "-----------------")?;

    let target = match cli.target {
        Some(target) => target,
        None => {
            write!(out, "Enter target ({}-{}): ", cli.low, cli.high)?;
            out.flush()?;
            read_target(input).context("failed to read target")?
        }
    };

    let trace = tree.trace(target);
    tracing::debug!(target, visited = trace.len(), outcome = ?trace.outcome(), "search done");
    for line in trace.lines(cli.report_miss) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
