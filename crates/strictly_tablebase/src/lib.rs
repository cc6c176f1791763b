//! Strictly Tablebase - a complete tic-tac-toe solver
//!
//! Every position reachable from the empty board is enumerated once and
//! evaluated by backward induction, down to how many plies a forced result
//! takes. The solved table answers, for any position, who wins under best
//! play and how every legal move ranks.
//!
//! # Architecture
//!
//! - **Board**: immutable position values built from two 9-bit sets
//! - **Evaluation**: absolute (X's view) and relative (mover's view) scores
//! - **Tablebase**: per-move-count arenas filled by a depth-first solver
//! - **Invariants**: composable checks run in debug builds and tests
//!
//! # Example
//!
//! ```
//! use strictly_tablebase::{Board, Position, Tablebase};
//!
//! let table = Tablebase::generate();
//! let start = table.lookup(&Board::new()).expect("empty board is reachable");
//! assert!(start.evaluation().is_draw());
//!
//! let after_center = table
//!     .follow_move(start, Position::Center)
//!     .expect("center is legal");
//! assert_eq!(after_center.board().move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod evaluation;
mod invariants;
mod position;
mod tablebase;
mod types;

// Crate-level exports - Board
pub use board::{Bitboard, Board, CELLS, MoveError, PositionError};

// Crate-level exports - Cells and players
pub use position::Position;
pub use types::{Player, TerminalState};

// Crate-level exports - Evaluation
pub use evaluation::{Absolute, EvaluationError, MATE, Relative};

// Crate-level exports - Tablebase
pub use tablebase::{BoardIndex, Entry, LAYERS, RankedMove, Tablebase};

// Crate-level exports - Invariants
pub use invariants::{
    BalancedMarksInvariant, BoardInvariants, DisjointOccupancyInvariant,
    EvaluationConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    LayeredChildrenInvariant, TablebaseInvariants, UniquePositionsInvariant,
};
