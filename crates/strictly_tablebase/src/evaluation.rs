//! Game-theoretic evaluations with distance-to-end granularity.
//!
//! Both perspectives share one signed scale. Zero is a proven draw. A
//! non-zero value `v` is a forced result `MATE - |v|` plies away: the sign
//! says who gets it, and a larger magnitude means the game ends sooner.
//!
//! - [`Absolute`] is fixed to X: positive favors X, negative favors O.
//! - [`Relative`] is fixed to the player to move: positive is a win for
//!   them, negative a loss.
//!
//! Ordering on [`Relative`] therefore prefers the fastest win, then a draw,
//! then the slowest loss.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Magnitude of a finished game; every ply away from the end costs one.
pub const MATE: i8 = 10;

/// Evaluation from X's fixed point of view.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i8", into = "i8")]
pub struct Absolute(i8);

/// Evaluation from the point of view of the player to move.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i8", into = "i8")]
pub struct Relative(i8);

/// Error returned when a raw value does not fit the evaluation scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EvaluationError {
    /// The magnitude exceeds [`MATE`].
    #[display("Evaluation {} is outside the scale (must be between -{} and {})", _0, MATE, MATE)]
    OutOfScale(i8),
}

impl std::error::Error for EvaluationError {}

fn check_scale(value: i8) -> Result<i8, EvaluationError> {
    if value.unsigned_abs() <= MATE.unsigned_abs() {
        Ok(value)
    } else {
        Err(EvaluationError::OutOfScale(value))
    }
}

impl TryFrom<i8> for Absolute {
    type Error = EvaluationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        check_scale(value).map(Self)
    }
}

impl From<Absolute> for i8 {
    fn from(evaluation: Absolute) -> Self {
        evaluation.0
    }
}

impl TryFrom<i8> for Relative {
    type Error = EvaluationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        check_scale(value).map(Self)
    }
}

impl From<Relative> for i8 {
    fn from(evaluation: Relative) -> Self {
        evaluation.0
    }
}

impl Absolute {
    /// A proven draw.
    pub const DRAW: Absolute = Absolute(0);

    /// Wraps a raw scale value.
    pub fn new(value: i8) -> Self {
        debug_assert!(value.abs() <= MATE, "evaluation {} outside scale", value);
        Self(value)
    }

    /// Raw scale value.
    pub fn value(self) -> i8 {
        self.0
    }

    /// Converts to the perspective of `to_move`.
    ///
    /// Negates unless X is to move; applying it twice with the same player
    /// is the identity.
    pub fn to_relative(self, to_move: Player) -> Relative {
        match to_move {
            Player::X => Relative(self.0),
            Player::O => Relative(-self.0),
        }
    }

    /// Returns true for a proven draw.
    pub fn is_draw(self) -> bool {
        self.0 == 0
    }

    /// The player with a forced win, if any.
    pub fn winner(self) -> Option<Player> {
        match self.0.signum() {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            _ => None,
        }
    }

    /// Plies until the game ends under best play, or `None` for a draw.
    pub fn plies_to_end(self) -> Option<u8> {
        plies_to_end(self.0)
    }
}

impl Relative {
    /// A proven draw.
    pub const DRAW: Relative = Relative(0);

    /// The side to move has already lost: the value of a finished won game.
    pub const LOST: Relative = Relative(-MATE);

    /// Wraps a raw scale value.
    pub fn new(value: i8) -> Self {
        debug_assert!(value.abs() <= MATE, "evaluation {} outside scale", value);
        Self(value)
    }

    /// Raw scale value.
    pub fn value(self) -> i8 {
        self.0
    }

    /// Converts back to X's perspective given who is to move.
    pub fn to_absolute(self, to_move: Player) -> Absolute {
        match to_move {
            Player::X => Absolute(self.0),
            Player::O => Absolute(-self.0),
        }
    }

    /// Re-expresses a child's evaluation for the player who moved into it.
    ///
    /// The sign flips to the opponent's side and a decided result moves one
    /// ply further from the end. The input must be at least two steps away
    /// from zero, which holds for anything reachable within nine plies.
    pub fn flip(self) -> Relative {
        debug_assert!(
            self.0.abs() != 1,
            "flipping {} would collapse a decided result into a draw",
            self.0
        );
        let negated = -self.0;
        Relative(negated - negated.signum())
    }

    /// Returns true for a proven draw.
    pub fn is_draw(self) -> bool {
        self.0 == 0
    }

    /// Returns true when the side to move can force a win.
    pub fn is_win(self) -> bool {
        self.0 > 0
    }

    /// Plies until the game ends under best play, or `None` for a draw.
    pub fn plies_to_end(self) -> Option<u8> {
        plies_to_end(self.0)
    }
}

fn plies_to_end(value: i8) -> Option<u8> {
    (value != 0).then(|| MATE.unsigned_abs().saturating_sub(value.unsigned_abs()))
}

impl std::fmt::Display for Absolute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.winner(), self.plies_to_end()) {
            (Some(player), Some(0)) => write!(f, "{} has won", player),
            (Some(player), Some(plies)) => write!(f, "{} wins in {}", player, plies),
            _ => write!(f, "draw"),
        }
    }
}

impl std::fmt::Display for Relative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.plies_to_end() {
            None => write!(f, "draw"),
            Some(plies) if self.is_win() => write!(f, "win in {}", plies),
            Some(plies) => write!(f, "loss in {}", plies),
        }
    }
}
