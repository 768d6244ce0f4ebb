use serde::{Deserialize, Serialize};

use crate::Player;

pub type Coordinates = (usize, usize);

/// Row-major index of a cell, `0..Board::CELL_COUNT`.
pub type CellIndex = usize;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub cell: CellIndex,
    pub player: Player,
}

impl Move {
    pub fn new(cell: CellIndex, player: Player) -> Self {
        Self { cell, player }
    }
}
