//! Unique positions invariant: transpositions share a single entry.

use super::Invariant;
use crate::Tablebase;
use std::collections::HashSet;

/// Invariant: no board is stored twice, and each board is stored in the
/// layer matching its move count.
pub struct UniquePositionsInvariant;

impl Invariant<Tablebase> for UniquePositionsInvariant {
    fn holds(table: &Tablebase) -> bool {
        let mut seen = HashSet::with_capacity(table.len());
        table.indexed().all(|(index, entry)| {
            index.move_count() == entry.board().move_count()
                && table.index_of(entry.board()) == Some(index)
                && seen.insert(*entry.board())
        })
    }

    fn description() -> &'static str {
        "Each reachable position is stored exactly once in its move-count layer"
    }
}
