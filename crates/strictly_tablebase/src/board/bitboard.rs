//! One player's marks as a 9-bit set.

use crate::Position;
use serde::{Deserialize, Serialize};

/// The eight winning triples as bit masks: rows, columns, diagonals.
const LINES: [u16; 8] = [
    // Rows
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    // Columns
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    // Diagonals
    0b100_010_001,
    0b001_010_100,
];

/// Set of cells, one bit per [`Position`] index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct Bitboard(u16);

impl From<u16> for Bitboard {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Bitboard> for u16 {
    fn from(bitboard: Bitboard) -> Self {
        bitboard.0
    }
}

impl Bitboard {
    /// Mask of the nine valid cell bits.
    pub const FULL: Bitboard = Bitboard(0b111_111_111);

    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a bitboard from raw bits; bits above the ninth are dropped.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & Self::FULL.0)
    }

    /// Raw bits.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Checks if the given cell is set.
    pub fn has(self, pos: Position) -> bool {
        self.0 >> pos.to_index() & 1 == 1
    }

    /// Returns a copy with the given cell set.
    pub fn with(self, pos: Position) -> Self {
        Self(self.0 | 1u16 << pos.to_index())
    }

    /// Number of cells set.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Checks if any winning triple is completely set.
    pub fn has_line(self) -> bool {
        LINES.iter().any(|&line| self.0 & line == line)
    }

    /// Returns true if both sets share no cell.
    pub fn is_disjoint(self, other: Bitboard) -> bool {
        self.0 & other.0 == 0
    }

    /// Union of both sets.
    pub fn union(self, other: Bitboard) -> Self {
        Self(self.0 | other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_has() {
        let board = Bitboard::EMPTY.with(Position::Center).with(Position::TopLeft);
        assert!(board.has(Position::Center));
        assert!(board.has(Position::TopLeft));
        assert!(!board.has(Position::BottomRight));
        assert_eq!(board.count(), 2);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            assert!(Bitboard::from_bits(line).has_line());
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_line() {
        let board = Bitboard::EMPTY
            .with(Position::TopLeft)
            .with(Position::TopCenter)
            .with(Position::Center);
        assert!(!board.has_line());
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        assert_eq!(Bitboard::from_bits(0xFFFF), Bitboard::FULL);
    }
}
