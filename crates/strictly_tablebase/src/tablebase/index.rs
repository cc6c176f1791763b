//! Two-level addresses into the tablebase.

use serde::{Deserialize, Serialize};

/// Address of an entry: its move-count layer, then its slot in that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct BoardIndex {
    move_count: usize,
    slot: usize,
}

impl BoardIndex {
    /// Number of marks on the indexed board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Position within the move-count layer.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl std::fmt::Display for BoardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.move_count, self.slot)
    }
}
