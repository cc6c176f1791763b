//! Evaluation consistency invariant: stored values follow backward induction.

use super::Invariant;
use crate::{Entry, Relative, Tablebase, TerminalState};
use tracing::warn;

/// Invariant: every stored evaluation agrees with its own position.
///
/// - A finished game is worth [`Relative::LOST`] to the side to move after a
///   win, and [`Relative::DRAW`] after a full board.
/// - An unfinished game has its moves ranked best first, each move carries
///   its child's evaluation flipped to the mover, and the position is worth
///   exactly its best move.
pub struct EvaluationConsistentInvariant;

impl Invariant<Tablebase> for EvaluationConsistentInvariant {
    fn holds(table: &Tablebase) -> bool {
        table.iter().all(|entry| {
            let consistent = entry_consistent(table, entry);
            if !consistent {
                warn!(board = %entry.board().notation(), "Inconsistent evaluation");
            }
            consistent
        })
    }

    fn description() -> &'static str {
        "Every evaluation matches its terminal state or its best move"
    }
}

fn entry_consistent(table: &Tablebase, entry: &Entry) -> bool {
    let relative = entry.relative_evaluation();
    match entry.board().state() {
        TerminalState::Drawn => relative == Relative::DRAW && entry.best_moves().is_empty(),
        TerminalState::XWon | TerminalState::OWon => {
            relative == Relative::LOST && entry.best_moves().is_empty()
        }
        TerminalState::Ongoing => {
            let moves = entry.best_moves();
            let children_agree = moves.iter().all(|ranked| {
                table
                    .get(ranked.child())
                    .is_some_and(|child| child.relative_evaluation().flip() == ranked.evaluation())
            });
            let sorted = moves
                .windows(2)
                .all(|pair| pair[0].evaluation() >= pair[1].evaluation());
            let best = moves.iter().map(|ranked| ranked.evaluation()).max();

            moves.len() == entry.board().legal_moves().len()
                && children_agree
                && sorted
                && best == Some(relative)
        }
    }
}
