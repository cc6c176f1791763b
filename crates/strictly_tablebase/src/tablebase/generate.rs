//! Exhaustive backward induction over the game tree.

use super::entry::{Entry, RankedMove};
use super::index::BoardIndex;
use super::Tablebase;
use crate::invariants::{InvariantSet, TablebaseInvariants};
use crate::{Board, Relative, TerminalState};
use tracing::{debug, info, instrument, trace};

impl Tablebase {
    /// Solves every position reachable from the empty board.
    ///
    /// The walk is depth first from the empty board. Each distinct board is
    /// solved once: a transposition finds the entry already stored in its
    /// move-count layer and reuses it.
    #[instrument]
    pub fn generate() -> Self {
        let mut table = Tablebase::default();
        let (root, evaluation) = table.resolve(Board::new());

        for (move_count, layer) in table.layers.iter().enumerate() {
            debug!(move_count, positions = layer.entries.len(), "Layer solved");
        }
        info!(
            positions = table.len(),
            %root,
            root_evaluation = %evaluation,
            "Tablebase generated"
        );

        debug_assert!(
            TablebaseInvariants::check_all(&table).is_ok(),
            "generated tablebase violates its invariants"
        );
        table
    }

    /// Returns the index of `board` and its value for the player to move,
    /// solving and storing it first if needed.
    ///
    /// Every child has one more mark than its parent, so the recursion is at
    /// most nine calls deep.
    fn resolve(&mut self, board: Board) -> (BoardIndex, Relative) {
        if let Some(index) = self.index_of(&board)
            && let Some(entry) = self.get(index)
        {
            return (index, entry.relative_evaluation());
        }

        let (evaluation, moves) = match board.state() {
            TerminalState::Ongoing => self.resolve_moves(&board),
            TerminalState::Drawn => (Relative::DRAW, Vec::new()),
            // the side to move is the one who just lost
            TerminalState::XWon | TerminalState::OWon => (Relative::LOST, Vec::new()),
        };

        let index = self.push(Entry {
            board,
            evaluation: evaluation.to_absolute(board.to_move()),
            moves,
        });
        trace!(%index, board = %board.notation(), %evaluation, "Position solved");
        (index, evaluation)
    }

    /// Solves every child of an unfinished board and ranks its moves.
    fn resolve_moves(&mut self, board: &Board) -> (Relative, Vec<RankedMove>) {
        let legal = board.legal_moves();
        let mut moves = Vec::with_capacity(legal.len());
        let mut best = None;

        for position in legal {
            let child = match board.apply(position) {
                Ok(child) => child,
                Err(err) => unreachable!("legal move {} rejected: {}", position, err),
            };
            let (child_index, child_evaluation) = self.resolve(child);
            let evaluation = child_evaluation.flip();

            best = best.max(Some(evaluation));
            moves.push(RankedMove::new(position, child_index, evaluation));
        }

        // stable: equal moves stay in ascending cell order
        moves.sort_by(|a, b| b.evaluation().cmp(&a.evaluation()));

        match best {
            Some(best) => (best, moves),
            None => unreachable!("unfinished board {} has no legal moves", board.notation()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::Invariant;
    use crate::EvaluationConsistentInvariant;

    #[test]
    fn test_layer_sizes() {
        let table = Tablebase::generate();
        let sizes: Vec<usize> = (0..crate::tablebase::LAYERS)
            .map(|move_count| table.layer_len(move_count))
            .collect();
        assert_eq!(sizes, vec![1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78]);
        assert_eq!(table.len(), 5478);
    }

    #[test]
    fn test_root_is_first_entry_of_layer_zero() {
        let table = Tablebase::generate();
        assert_eq!(table.index_of(&Board::new()), Some(BoardIndex::new(0, 0)));
    }

    #[test]
    fn test_evaluations_consistent() {
        let table = Tablebase::generate();
        assert!(EvaluationConsistentInvariant::holds(&table));
    }
}
