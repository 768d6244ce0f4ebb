use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

/// Status of a game, always derived from the board it was evaluated on.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Outcome {
    #[default]
    Ongoing,
    Won {
        winner: Player,
    },
    Draw,
}

impl Outcome {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Outcome::Ongoing)
    }

    /// Terminal outcomes stay put until the game is reset.
    pub fn is_terminal(&self) -> bool {
        !self.is_ongoing()
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Won { winner } => write!(f, "{} wins", winner),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
