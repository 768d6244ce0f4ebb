use serde::{Deserialize, Serialize};

use crate::{Board, Outcome, Player};

/// Everything a front end needs to draw the game after a state change.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub next_player: Player,
    pub outcome: Outcome,
}

impl Snapshot {
    pub fn new(board: Board, next_player: Player, outcome: Outcome) -> Self {
        Self {
            board,
            next_player,
            outcome,
        }
    }
}
