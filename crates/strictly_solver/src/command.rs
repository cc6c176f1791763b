//! Parsing of shell command lines.

use derive_more::Display;
use std::str::FromStr;
use strictly_tablebase::MoveError;
use tracing::instrument;

/// A single shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the current position with a position string.
    Load(String),
    /// Play a cell, given as a number (1-9) or a label.
    Play(String),
    /// Play the top-ranked move.
    Best,
    /// Show the current position's report.
    Eval,
    /// Show the current position's report as JSON.
    Json,
    /// Show usage.
    Help,
    /// Leave the shell.
    Exit,
}

/// A command line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("empty command")]
    Empty,

    /// The first word is not a command.
    #[display("unknown command {:?}", _0)]
    Unknown(String),

    /// Wrong number of arguments.
    #[display("usage: {}", _0)]
    Usage(&'static str),

    /// A move argument that names no cell.
    #[display("{:?} is not a valid move", _0)]
    InvalidMove(String),

    /// A cell the current board does not accept.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            ("load", [position]) => Ok(Command::Load(position.to_string())),
            ("load", _) => Err(CommandError::Usage("load <position>")),
            ("play", [cell]) => Ok(Command::Play(cell.to_string())),
            ("play", _) => Err(CommandError::Usage("play <move>")),
            ("best", []) => Ok(Command::Best),
            ("best", _) => Err(CommandError::Usage("best")),
            ("eval", []) => Ok(Command::Eval),
            ("eval", _) => Err(CommandError::Usage("eval")),
            ("json", []) => Ok(Command::Json),
            ("json", _) => Err(CommandError::Usage("json")),
            ("help", _) => Ok(Command::Help),
            ("exit" | "quit", _) => Ok(Command::Exit),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "load x........".parse::<Command>(),
            Ok(Command::Load("x........".into()))
        );
        assert_eq!("  play 5 ".parse::<Command>(), Ok(Command::Play("5".into())));
        assert_eq!("best".parse::<Command>(), Ok(Command::Best));
        assert_eq!("eval".parse::<Command>(), Ok(Command::Eval));
        assert_eq!("json".parse::<Command>(), Ok(Command::Json));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(
            "load".parse::<Command>(),
            Err(CommandError::Usage("load <position>"))
        );
        assert_eq!(
            "play 1 2".parse::<Command>(),
            Err(CommandError::Usage("play <move>"))
        );
        assert_eq!("eval now".parse::<Command>(), Err(CommandError::Usage("eval")));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(
            "undo".parse::<Command>(),
            Err(CommandError::Unknown("undo".into()))
        );
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
    }
}
