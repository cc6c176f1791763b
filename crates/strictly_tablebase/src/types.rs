//! Core domain types shared by the board and the evaluation model.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the lowercase symbol used in position strings.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Terminal state of a board, derived from its occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalState {
    /// Game is still being played.
    Ongoing,
    /// All cells filled without a line.
    Drawn,
    /// X completed a line.
    XWon,
    /// O completed a line.
    OWon,
}

impl TerminalState {
    /// Returns true once no further moves can be made.
    pub fn is_terminal(self) -> bool {
        self != TerminalState::Ongoing
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalState::XWon => Some(Player::X),
            TerminalState::OWon => Some(Player::O),
            TerminalState::Ongoing | TerminalState::Drawn => None,
        }
    }
}

impl std::fmt::Display for TerminalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalState::Ongoing => write!(f, "unfinished game"),
            TerminalState::Drawn => write!(f, "draw"),
            TerminalState::XWon => write!(f, "x wins"),
            TerminalState::OWon => write!(f, "o wins"),
        }
    }
}
