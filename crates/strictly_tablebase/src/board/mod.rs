//! Board representation and move rules.

mod bitboard;
mod error;
mod grid;
mod notation;

pub use bitboard::Bitboard;
pub use error::{MoveError, PositionError};
pub use grid::{Board, CELLS};
