//! Board value type: occupancy, turn and terminal state.

use super::bitboard::Bitboard;
use super::error::MoveError;
use crate::invariants::assert_invariants;
use crate::{Player, Position, TerminalState};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Total number of cells, and the longest possible game in plies.
pub const CELLS: u32 = 9;

/// A tic-tac-toe position.
///
/// Boards are values: [`Board::apply`] returns a new board and leaves the
/// receiver untouched. The move counter and the player to move are derived
/// from the two bit-sets, and the terminal state is recomputed on every
/// construction so it can never drift from the occupancy.
///
/// With serde a board travels as its position string, so decoding runs the
/// same checks as [`str::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    x: Bitboard,
    o: Bitboard,
    state: TerminalState,
}

impl Board {
    /// Creates the empty starting board.
    pub fn new() -> Self {
        Self {
            x: Bitboard::EMPTY,
            o: Bitboard::EMPTY,
            state: TerminalState::Ongoing,
        }
    }

    /// Builds a board from both players' marks.
    ///
    /// # Panics
    ///
    /// Panics if the two sets overlap; callers only pass occupancy they
    /// built cell by cell.
    pub(crate) fn from_parts(x: Bitboard, o: Bitboard) -> Self {
        assert!(
            x.is_disjoint(o),
            "board occupancy overlaps: x={:#011b} o={:#011b}",
            x.bits(),
            o.bits()
        );
        Self {
            x,
            o,
            state: compute_state(x, o),
        }
    }

    /// X's marks.
    pub fn x(&self) -> Bitboard {
        self.x
    }

    /// O's marks.
    pub fn o(&self) -> Bitboard {
        self.o
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.x.union(self.o).count() as usize
    }

    /// Player whose turn it is; X moves on even move counts.
    pub fn to_move(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Terminal state derived from the occupancy.
    pub fn state(&self) -> TerminalState {
        self.state
    }

    /// Returns the mark at the given cell.
    pub fn get(&self, pos: Position) -> Option<Player> {
        if self.x.has(pos) {
            Some(Player::X)
        } else if self.o.has(pos) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Checks whether `pos` may be played now.
    pub fn is_legal(&self, pos: Position) -> bool {
        !self.state.is_terminal() && self.is_empty(pos)
    }

    /// Returns all legal moves in ascending cell order.
    ///
    /// Empty whenever the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_legal(pos))
            .collect()
    }

    /// Plays a mark for the side to move, returning the resulting board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board is already terminal.
    /// - [`MoveError::Occupied`] if the cell holds a mark.
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&self, pos: Position) -> Result<Board, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let next = match self.to_move() {
            Player::X => Board::from_parts(self.x.with(pos), self.o),
            Player::O => Board::from_parts(self.x, self.o.with(pos)),
        };
        assert_invariants(&next);
        Ok(next)
    }

    /// Plays the cell with the given number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for numbers outside 1-9, and
    /// otherwise whatever [`Board::apply`] returns.
    #[instrument(skip(self))]
    pub fn play(&self, number: u8) -> Result<Board, MoveError> {
        self.apply(Position::from_number(number)?)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the terminal state in fixed priority: x line, o line, full board.
fn compute_state(x: Bitboard, o: Bitboard) -> TerminalState {
    if x.has_line() {
        TerminalState::XWon
    } else if o.has_line() {
        TerminalState::OWon
    } else if x.union(o).count() == CELLS {
        TerminalState::Drawn
    } else {
        TerminalState::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().expect("valid position string")
    }

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), Position::ALL.to_vec());
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.state(), TerminalState::Ongoing);
    }

    #[test]
    fn test_apply_alternates_players() {
        let board = Board::new().apply(Position::Center).unwrap();
        assert_eq!(board.get(Position::Center), Some(Player::X));
        assert_eq!(board.to_move(), Player::O);

        let board = board.apply(Position::TopLeft).unwrap();
        assert_eq!(board.get(Position::TopLeft), Some(Player::O));
        assert_eq!(board.move_count(), 2);
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let before = Board::new();
        let after = before.apply(Position::Center).unwrap();
        assert_ne!(before, after);
        assert_eq!(before.move_count(), 0);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = Board::new().apply(Position::Center).unwrap();
        assert_eq!(
            board.apply(Position::Center),
            Err(MoveError::Occupied(Position::Center))
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Board::new().play(0), Err(MoveError::OutOfRange(0)));
        assert_eq!(Board::new().play(10), Err(MoveError::OutOfRange(10)));
    }

    #[test]
    fn test_move_after_win_rejected() {
        let won = board("xxxoo....");
        assert_eq!(won.state(), TerminalState::XWon);
        assert!(won.legal_moves().is_empty());
        assert_eq!(won.apply(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let drawn = board("xoxxoooxx");
        assert_eq!(drawn.state(), TerminalState::Drawn);
        assert!(drawn.legal_moves().is_empty());
    }

    #[test]
    fn test_x_line_takes_priority_over_o_line() {
        let both = board("xxxooo...");
        assert_eq!(both.state(), TerminalState::XWon);
    }

    #[test]
    fn test_completing_move_wins() {
        let board = board("xx.oo....");
        let won = board.apply(Position::TopRight).unwrap();
        assert_eq!(won.state(), TerminalState::XWon);
    }

    #[test]
    #[should_panic(expected = "overlaps")]
    fn test_overlapping_occupancy_panics() {
        let cell = Bitboard::EMPTY.with(Position::Center);
        let _ = Board::from_parts(cell, cell);
    }
}
