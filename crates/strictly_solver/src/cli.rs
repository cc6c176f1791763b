//! Command-line interface for strictly_solver.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Solver - perfect-play tic-tac-toe tablebase explorer
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Explore the solved game of tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Position to start from: 9 cells of x, o and . in row-major order
    pub position: Option<String>,

    /// Path to the configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "strictly_solver.toml")]
    pub config: PathBuf,

    /// Tracing filter, overriding RUST_LOG and the configured filter
    #[arg(long)]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_solver"]).unwrap();
        assert_eq!(cli.position, None);
        assert_eq!(cli.config, PathBuf::from("strictly_solver.toml"));
        assert_eq!(cli.log, None);
    }

    #[test]
    fn test_position_and_flags() {
        let cli = Cli::try_parse_from([
            "strictly_solver",
            "x...o....",
            "--config",
            "custom.toml",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.position.as_deref(), Some("x...o...."));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["strictly_solver", ".........", "extra"]).is_err());
    }
}
