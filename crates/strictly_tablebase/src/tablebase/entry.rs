//! Stored positions and their ranked moves.

use super::index::BoardIndex;
use crate::{Absolute, Board, Position, Relative};
use serde::{Deserialize, Serialize};

/// A legal move together with where it leads and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct RankedMove {
    position: Position,
    child: BoardIndex,
    evaluation: Relative,
}

impl RankedMove {
    /// The cell played.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Index of the resulting position.
    pub fn child(&self) -> BoardIndex {
        self.child
    }

    /// Value of the move for the player making it.
    pub fn evaluation(&self) -> Relative {
        self.evaluation
    }
}

/// A solved position.
///
/// Entries are created once during generation and never change afterwards.
/// They hold no reference to the table they live in; follow a move with
/// [`Tablebase::follow_move`](super::Tablebase::follow_move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(super) board: Board,
    pub(super) evaluation: Absolute,
    pub(super) moves: Vec<RankedMove>,
}

impl Entry {
    /// The position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Value of the position from X's side.
    pub fn evaluation(&self) -> Absolute {
        self.evaluation
    }

    /// Value of the position for the player to move.
    pub fn relative_evaluation(&self) -> Relative {
        self.evaluation.to_relative(self.board.to_move())
    }

    /// Legal moves ranked from best to worst for the player to move.
    ///
    /// Moves of equal value keep ascending cell order.
    pub fn best_moves(&self) -> &[RankedMove] {
        &self.moves
    }

    /// The top-ranked move, if the game is not over.
    pub fn best_move(&self) -> Option<&RankedMove> {
        self.moves.first()
    }

    /// The ranking entry for a specific cell, if it is a legal move.
    pub fn ranked(&self, position: Position) -> Option<&RankedMove> {
        self.moves.iter().find(|ranked| ranked.position == position)
    }
}
