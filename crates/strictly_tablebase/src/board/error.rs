//! Errors raised while building or advancing a board.

use crate::Position;

/// Error that can occur when applying a move.
///
/// A failed move never modifies the board it was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The cell number is not one of 1-9.
    #[display("Move {} is out of range (must be 1-9)", _0)]
    OutOfRange(u8),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

/// Error returned when a position string cannot be decoded.
///
/// No board is produced when decoding fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// The string is not exactly nine characters long.
    #[display("Invalid position string {:?}: expected 9 cells, found {}", input, found)]
    Length {
        /// The rejected input.
        input: String,
        /// Number of characters found.
        found: usize,
    },

    /// The string contains something other than `x`, `o` or `.`.
    #[display("Invalid position string {:?}: unexpected symbol {:?}", input, symbol)]
    Symbol {
        /// The rejected input.
        input: String,
        /// The offending character.
        symbol: char,
    },

    /// The mark counts cannot come from alternating play starting with x.
    #[display(
        "Invalid position string {:?}: {} x marks and {} o marks cannot arise from alternating play",
        input,
        x,
        o
    )]
    MarkCount {
        /// The rejected input.
        input: String,
        /// Number of x marks.
        x: u32,
        /// Number of o marks.
        o: u32,
    },
}

impl std::error::Error for PositionError {}
