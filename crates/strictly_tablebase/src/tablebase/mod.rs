//! The solved table of every position reachable from the empty board.
//!
//! Entries live in flat per-layer arenas, one layer per move count (0-9).
//! All navigation goes through the [`Tablebase`] and [`BoardIndex`] values;
//! entries never point back at their table.
//!
//! After [`Tablebase::generate`] returns, the table is never mutated again, so
//! a shared reference can be handed to any number of readers.

mod entry;
mod generate;
mod index;

pub use entry::{Entry, RankedMove};
pub use index::BoardIndex;

use crate::board::CELLS;
use crate::{Board, Position};
use std::collections::HashMap;
use tracing::instrument;

/// Number of move-count layers: boards with 0 through 9 marks.
pub const LAYERS: usize = CELLS as usize + 1;

/// One move-count bucket.
#[derive(Debug, Default)]
struct Layer {
    entries: Vec<Entry>,
    slots: HashMap<Board, usize>,
}

/// Table of all reachable tic-tac-toe positions and their evaluations.
#[derive(Debug, Default)]
pub struct Tablebase {
    layers: [Layer; LAYERS],
}

impl Tablebase {
    /// Total number of stored positions.
    pub fn len(&self) -> usize {
        self.layers.iter().map(|layer| layer.entries.len()).sum()
    }

    /// Returns true before generation has run.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored positions with `move_count` marks.
    pub fn layer_len(&self, move_count: usize) -> usize {
        self.layers
            .get(move_count)
            .map_or(0, |layer| layer.entries.len())
    }

    /// Fetches the entry at `index`.
    pub fn get(&self, index: BoardIndex) -> Option<&Entry> {
        self.layers
            .get(index.move_count())?
            .entries
            .get(index.slot())
    }

    /// Finds the index of a board by structural equality within its layer.
    pub fn index_of(&self, board: &Board) -> Option<BoardIndex> {
        let move_count = board.move_count();
        self.layers
            .get(move_count)?
            .slots
            .get(board)
            .map(|&slot| BoardIndex::new(move_count, slot))
    }

    /// Looks up a board.
    ///
    /// Returns `None` for boards that alternating play from the empty board
    /// never reaches (or if the table has not been generated). That is an
    /// ordinary answer, not a failure.
    #[instrument(skip_all, fields(board = %board.notation()))]
    pub fn lookup(&self, board: &Board) -> Option<&Entry> {
        self.index_of(board).and_then(|index| self.get(index))
    }

    /// Follows one ply from `entry`.
    ///
    /// Returns `None` if `position` is not a legal move there.
    #[instrument(skip(self, entry), fields(board = %entry.board().notation()))]
    pub fn follow_move(&self, entry: &Entry, position: Position) -> Option<&Entry> {
        entry
            .ranked(position)
            .and_then(|ranked| self.get(ranked.child()))
    }

    /// Iterates over every entry in layer order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.layers.iter().flat_map(|layer| layer.entries.iter())
    }

    /// Iterates over every entry together with its index.
    pub fn indexed(&self) -> impl Iterator<Item = (BoardIndex, &Entry)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(move_count, layer)| {
                layer
                    .entries
                    .iter()
                    .enumerate()
                    .map(move |(slot, entry)| (BoardIndex::new(move_count, slot), entry))
            })
    }

    /// Appends a new entry to its layer and returns its index.
    fn push(&mut self, entry: Entry) -> BoardIndex {
        let move_count = entry.board.move_count();
        let layer = &mut self.layers[move_count];
        let slot = layer.entries.len();
        layer.slots.insert(entry.board, slot);
        layer.entries.push(entry);
        BoardIndex::new(move_count, slot)
    }
}
