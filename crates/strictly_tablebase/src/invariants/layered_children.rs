//! Layered children invariant: every move lands exactly one layer deeper.

use super::Invariant;
use crate::Tablebase;

/// Invariant: each ranked move points at an existing entry whose board is
/// the parent's board after that move.
///
/// Since children always sit one move-count layer below their parent, the
/// position graph is acyclic and at most nine plies deep.
pub struct LayeredChildrenInvariant;

impl Invariant<Tablebase> for LayeredChildrenInvariant {
    fn holds(table: &Tablebase) -> bool {
        table.iter().all(|entry| {
            entry.best_moves().iter().all(|ranked| {
                let expected = entry.board().apply(ranked.position()).ok();
                ranked.child().move_count() == entry.board().move_count() + 1
                    && table.get(ranked.child()).map(|child| *child.board()) == expected
            })
        })
    }

    fn description() -> &'static str {
        "Every move points at the resulting position one layer deeper"
    }
}
