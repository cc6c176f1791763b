//! Strictly Solver - interactive shell over the tic-tac-toe tablebase
//!
//! Thin I/O layer around `strictly_tablebase`: it parses command lines,
//! keeps the current position, and renders tablebase entries as text or
//! JSON.
//!
//! # Example
//!
//! ```
//! use strictly_solver::{Shell, SolverConfig};
//! use strictly_tablebase::{Board, Tablebase};
//!
//! # fn example() -> anyhow::Result<()> {
//! let table = Tablebase::generate();
//! let mut shell = Shell::new(&table, Board::new(), SolverConfig::default());
//! let mut output = Vec::new();
//! shell.run("play 5\neval\n".as_bytes(), &mut output)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod command;
mod config;
mod report;
mod shell;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, SolverConfig};

// Crate-level exports - Shell
pub use command::{Command, CommandError};
pub use report::{LineReport, PositionReport};
pub use shell::{Flow, Shell};
