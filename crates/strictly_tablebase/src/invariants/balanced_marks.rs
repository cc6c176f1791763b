//! Balanced marks invariant: counts are consistent with alternating play.

use super::Invariant;
use crate::Board;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Together with the derived move counter this keeps the player to move
/// equal to `move_count % 2`.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.x().count();
        let o = board.o().count();
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_while_playing_first_free_cell() {
        let mut board = Board::new();
        while let Some(&pos) = board.legal_moves().first() {
            board = board.apply(pos).unwrap();
            assert!(BalancedMarksInvariant::holds(&board));
            let expected = if board.move_count() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            assert_eq!(board.to_move(), expected);
        }
    }
}
