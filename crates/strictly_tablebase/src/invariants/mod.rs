//! First-class invariants for boards and the tablebase.
//!
//! Invariants are logical properties that must hold for every value the
//! public operations can produce. They are checked in debug builds and can
//! be tested independently. A violation is a programming defect, never an
//! error for callers to handle.

use crate::Board;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

pub mod balanced_marks;
pub mod disjoint_occupancy;
pub mod evaluation_consistent;
pub mod layered_children;
pub mod unique_positions;

pub use balanced_marks::BalancedMarksInvariant;
pub use disjoint_occupancy::DisjointOccupancyInvariant;
pub use evaluation_consistent::EvaluationConsistentInvariant;
pub use layered_children::LayeredChildrenInvariant;
pub use unique_positions::UniquePositionsInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (DisjointOccupancyInvariant, BalancedMarksInvariant);

/// All tablebase invariants as a composable set.
pub type TablebaseInvariants = (
    EvaluationConsistentInvariant,
    LayeredChildrenInvariant,
    UniquePositionsInvariant,
);

/// Asserts that all board invariants hold (panic on violation in debug builds).
#[instrument(level = "trace")]
pub fn assert_invariants(board: &Board) {
    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(board)
    {
        warn!(?violations, board = %board.notation(), "Board invariants violated");
        panic!("Board invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_board_invariants_hold_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_board_invariants_hold_after_moves() {
        let mut board = Board::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            board = board.apply(pos).unwrap();
            assert!(BoardInvariants::check_all(&board).is_ok());
        }
    }
}
