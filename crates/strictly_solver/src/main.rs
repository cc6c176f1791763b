//! Strictly Solver - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_solver::{Cli, Shell, SolverConfig};
use strictly_tablebase::{Board, Tablebase};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SolverConfig::load_or_default(&cli.config)?;
    initialize_tracing(cli.log.as_deref(), config.log_filter());

    let position = cli
        .position
        .clone()
        .unwrap_or_else(|| config.start_position().clone());
    let board: Board = position
        .parse()
        .with_context(|| format!("Cannot start from {:?}", position))?;

    let table = generate_tablebase();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&table, board, config).run(stdin.lock(), stdout.lock())
}

#[instrument]
fn generate_tablebase() -> Tablebase {
    info!("Generating tablebase");
    Tablebase::generate()
}

/// Logs go to stderr so the shell's stdout stays clean.
fn initialize_tracing(cli_filter: Option<&str>, config_filter: &str) {
    let filter = match cli_filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_filter)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
