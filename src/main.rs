//! CLI entry point for the pixel charge-density integrator

use chargegrid::io::cli::{Cli, GridRunner};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> chargegrid::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let mut runner = GridRunner::new(cli, stdin.lock(), std::io::stdout().lock());
    runner.run().map(|_| ())
}
