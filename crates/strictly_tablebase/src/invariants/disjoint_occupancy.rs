//! Disjoint occupancy invariant: no cell is owned by both players.

use super::Invariant;
use crate::Board;

/// Invariant: X's and O's bit-sets never share a cell.
pub struct DisjointOccupancyInvariant;

impl Invariant<Board> for DisjointOccupancyInvariant {
    fn holds(board: &Board) -> bool {
        board.x().is_disjoint(board.o())
    }

    fn description() -> &'static str {
        "No cell is marked by both players"
    }
}
