//! Line-oriented command loop over a generated tablebase.

use crate::command::{Command, CommandError};
use crate::config::SolverConfig;
use crate::report::PositionReport;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tablebase::{Board, MoveError, Position, Tablebase};
use tracing::{debug, info, instrument, warn};

const BANNER: &str = "\
Strictly Solver - perfect-play tic-tac-toe

Type 'help' for help regarding commands";

const NOT_FOUND: &str = "position not found in tablebase";

const HELP: &str = "\
Commands:
  load <position>   Load the given position
  play <move>       Play the given move on the current position
  best              Play the best move on the current position
  eval              Evaluate the current position and show its lines
  json              Show the current evaluation as JSON
  help              Show this help
  exit              Leave the shell

Position string (<position>):
  Nine characters, one per cell in row-major order: x and o are marks,
  . is an empty cell. x moves first, so x has as many marks as o or one
  more.

Moves (<move>):
  A cell number or a cell name such as center or top-left.
    1 2 3
    4 5 6
    7 8 9";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Interactive session holding the current position.
#[derive(Debug)]
pub struct Shell<'t> {
    table: &'t Tablebase,
    board: Board,
    config: SolverConfig,
}

impl<'t> Shell<'t> {
    /// Creates a shell positioned at `board`.
    #[instrument(skip(table, config), fields(board = %board.notation()))]
    pub fn new(table: &'t Tablebase, board: Board, config: SolverConfig) -> Self {
        Self {
            table,
            board,
            config,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reads commands from `input` until `exit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", BANNER)?;
        info!("Shell started");

        let mut line = String::new();
        loop {
            write!(output, "\n{}", self.config.prompt())?;
            output.flush()?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                writeln!(output)?;
                break;
            }
            writeln!(output)?;

            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    warn!(error = %err, "Rejected command line");
                    writeln!(output, "solver: {}", err)?;
                    continue;
                }
            };
            if self.execute(command, &mut output)? == Flow::Exit {
                break;
            }
        }

        info!("Shell exited");
        Ok(())
    }

    /// Runs one command, writing its result to `output`.
    #[instrument(skip(self, output), fields(board = %self.board.notation()))]
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow> {
        match command {
            Command::Load(position) => match position.parse::<Board>() {
                Ok(board) => {
                    info!(position = %position, "Loaded position");
                    self.board = board;
                    self.report(output)?;
                }
                Err(err) => writeln!(output, "solver: {}", err)?,
            },
            Command::Play(cell) => match self.play(&cell) {
                Ok(board) => {
                    self.board = board;
                    self.report(output)?;
                }
                Err(err) => writeln!(output, "solver: {}", err)?,
            },
            Command::Best => self.play_best(output)?,
            Command::Eval => self.report(output)?,
            Command::Json => self.json(output)?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Resolves a move argument against the current board.
    fn play(&self, cell: &str) -> std::result::Result<Board, CommandError> {
        let result = match cell.parse::<u8>() {
            Ok(number) => self.board.play(number),
            Err(_) => match Position::from_label_or_number(cell) {
                Some(position) => self.board.apply(position),
                None => return Err(CommandError::InvalidMove(cell.to_string())),
            },
        };
        result.map_err(CommandError::Move)
    }

    fn play_best<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let Some(entry) = self.table.lookup(&self.board) else {
            writeln!(output, "solver: {}", NOT_FOUND)?;
            return Ok(());
        };
        let Some(best) = entry.best_move() else {
            writeln!(output, "solver: {}", MoveError::GameOver)?;
            return Ok(());
        };

        info!(
            cell = best.position().number(),
            evaluation = %best.evaluation(),
            "Playing best move"
        );
        writeln!(output, "Playing {} ({})", best.position(), best.position().label())?;
        self.board = self
            .board
            .apply(best.position())
            .context("Ranked move rejected by the board")?;
        self.report(output)
    }

    fn report<W: Write>(&self, output: &mut W) -> Result<()> {
        match self.table.lookup(&self.board) {
            Some(entry) => write!(output, "{}", PositionReport::new(self.table, entry))?,
            None => {
                debug!(board = %self.board.notation(), "Tablebase miss");
                writeln!(output, "{}\n\n{}", self.board, NOT_FOUND)?;
            }
        }
        Ok(())
    }

    fn json<W: Write>(&self, output: &mut W) -> Result<()> {
        let Some(entry) = self.table.lookup(&self.board) else {
            writeln!(output, "solver: {}", NOT_FOUND)?;
            return Ok(());
        };
        let report = PositionReport::new(self.table, entry);
        let json = if *self.config.json_pretty() {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("Failed to serialize report")?;
        writeln!(output, "{}", json)?;
        Ok(())
    }
}
