use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

/// A single cell of the board.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[default]
    Vacant,
    Occupied { player: Player },
}

impl Field {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Field::Vacant => None,
            Field::Occupied { player } => Some(*player),
        }
    }
}

impl From<Player> for Field {
    fn from(player: Player) -> Self {
        Field::Occupied { player }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Vacant => write!(f, " "),
            Field::Occupied { player } => write!(f, "{}", player),
        }
    }
}
