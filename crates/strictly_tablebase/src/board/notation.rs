//! Textual position strings.
//!
//! A position string has exactly nine characters, one per cell in row-major
//! order (cell 1 first). `x` and `o` are marks, `.` is an empty cell.
//! Decoding only checks the format and the mark counts: boards where both
//! players have a line are accepted here and simply never appear in the
//! tablebase.

use super::bitboard::Bitboard;
use super::error::PositionError;
use super::grid::{Board, CELLS};
use crate::{Player, Position};
use std::str::FromStr;
use tracing::{debug, instrument};

const EMPTY_SYMBOL: char = '.';

impl Board {
    /// Encodes the board as a nine-character position string.
    pub fn notation(&self) -> String {
        Position::ALL
            .iter()
            .map(|&pos| self.get(pos).map_or(EMPTY_SYMBOL, Player::symbol))
            .collect()
    }
}

impl FromStr for Board {
    type Err = PositionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != CELLS as usize {
            return Err(PositionError::Length {
                input: s.to_string(),
                found,
            });
        }

        let mut x = Bitboard::EMPTY;
        let mut o = Bitboard::EMPTY;
        for (pos, symbol) in Position::ALL.iter().copied().zip(s.chars()) {
            match symbol {
                'x' => x = x.with(pos),
                'o' => o = o.with(pos),
                EMPTY_SYMBOL => {}
                _ => {
                    return Err(PositionError::Symbol {
                        input: s.to_string(),
                        symbol,
                    });
                }
            }
        }

        // x moves first, so x has as many marks as o or exactly one more
        let (x_count, o_count) = (x.count(), o.count());
        if x_count != o_count && x_count != o_count + 1 {
            return Err(PositionError::MarkCount {
                input: s.to_string(),
                x: x_count,
                o: o_count,
            });
        }

        let board = Board::from_parts(x, o);
        debug!(position = %s, state = %board.state(), "Decoded position string");
        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = PositionError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        notation.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pos) in Position::ALL.iter().enumerate() {
            let symbol = self.get(*pos).map_or(EMPTY_SYMBOL, Player::symbol);
            write!(f, "{}", symbol)?;
            if i % 3 == 2 {
                if i != 8 {
                    writeln!(f)?;
                }
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerminalState;

    #[test]
    fn test_empty_string_parses_to_new_board() {
        let board: Board = ".........".parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_notation_survives_parse() {
        let board = Board::new()
            .apply(Position::Center)
            .unwrap()
            .apply(Position::TopRight)
            .unwrap();
        assert_eq!(board.notation(), "..o.x....");
        assert_eq!(board.notation().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = "xo".parse::<Board>().unwrap_err();
        assert!(matches!(err, PositionError::Length { found: 2, .. }));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let err = "xoX......".parse::<Board>().unwrap_err();
        assert!(matches!(err, PositionError::Symbol { symbol: 'X', .. }));
    }

    #[test]
    fn test_o_ahead_of_x_rejected() {
        let err = "oo.x.....".parse::<Board>().unwrap_err();
        assert!(matches!(err, PositionError::MarkCount { x: 1, o: 2, .. }));
    }

    #[test]
    fn test_x_two_ahead_rejected() {
        let err = "xxxxxooo.".parse::<Board>().unwrap_err();
        assert!(matches!(err, PositionError::MarkCount { x: 5, o: 3, .. }));
        assert!(err.to_string().contains("alternating play"));
    }

    #[test]
    fn test_double_win_accepted_with_x_priority() {
        let board: Board = "xxxooo...".parse().unwrap();
        assert_eq!(board.state(), TerminalState::XWon);
    }

    #[test]
    fn test_display_renders_grid() {
        let board: Board = "x...o...x".parse().unwrap();
        assert_eq!(board.to_string(), "x . .\n. o .\n. . x");
    }
}
