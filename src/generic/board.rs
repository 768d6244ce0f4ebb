use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CellIndex, Coordinates, Field, Player};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("cell {0} is outside the board")]
    OutOfBounds(CellIndex),
    #[error("cell {0} is already occupied")]
    FieldOccupied(CellIndex),
    #[error("the game has already ended")]
    GameEnded,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a board needs exactly {expected} cells, got {actual}")]
pub struct BoardShapeError {
    pub expected: usize,
    pub actual: usize,
}

const CELL_COUNT: usize = 9;

/// The 3x3 grid, addressed either by row-major cell index or by coordinates.
///
/// Serialized as a flat list of the nine cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Field>", into = "Vec<Field>")]
pub struct Board {
    pub data: Array2<Field>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Field; CELL_COUNT]> for Board {
    fn from(cells: [Field; CELL_COUNT]) -> Self {
        Self {
            data: Array2::from_shape_fn(Self::SIZE, |(row, column)| {
                cells[row * Self::SIZE.1 + column]
            }),
        }
    }
}

impl TryFrom<Vec<Field>> for Board {
    type Error = BoardShapeError;

    fn try_from(cells: Vec<Field>) -> Result<Self, Self::Error> {
        let cells: [Field; CELL_COUNT] =
            cells.try_into().map_err(|cells: Vec<Field>| BoardShapeError {
                expected: CELL_COUNT,
                actual: cells.len(),
            })?;
        Ok(Board::from(cells))
    }
}

impl From<Board> for Vec<Field> {
    fn from(board: Board) -> Self {
        board.cells().collect()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    pub const CELL_COUNT: usize = CELL_COUNT;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem(Self::SIZE, Field::Vacant),
        }
    }

    /// Maps a row-major cell index onto grid coordinates.
    /// Example: 5 -> (1, 2)
    pub fn coordinates_for_cell(cell: CellIndex) -> Option<Coordinates> {
        if cell >= Self::CELL_COUNT {
            return None;
        }
        Some((cell / Self::SIZE.1, cell % Self::SIZE.1))
    }

    pub fn get(&self, cell: CellIndex) -> Option<Field> {
        Self::coordinates_for_cell(cell).map(|coordinates| self.data[coordinates])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Field> + '_ {
        self.data.iter().copied()
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|field| !field.is_vacant())
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Field::is_vacant)
    }

    pub fn validate_move(&self, cell: CellIndex) -> Result<Coordinates, InvalidMove> {
        let coordinates =
            Self::coordinates_for_cell(cell).ok_or(InvalidMove::OutOfBounds(cell))?;
        if !self.data[coordinates].is_vacant() {
            return Err(InvalidMove::FieldOccupied(cell));
        }
        Ok(coordinates)
    }

    /// Writes `player` into a vacant cell. Occupied cells are never overwritten.
    pub fn place(&mut self, cell: CellIndex, player: Player) -> Result<(), InvalidMove> {
        let coordinates = self.validate_move(cell)?;
        debug!("placing {} at {:?}", player, coordinates);
        self.data[coordinates] = Field::from(player);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const X: Field = Field::Occupied { player: Player::X };
    const O: Field = Field::Occupied { player: Player::O };
    const E: Field = Field::Vacant;

    #[test]
    fn coordinates_for_cell() {
        assert_eq!(Board::coordinates_for_cell(0), Some((0, 0)));
        assert_eq!(Board::coordinates_for_cell(2), Some((0, 2)));
        assert_eq!(Board::coordinates_for_cell(3), Some((1, 0)));
        assert_eq!(Board::coordinates_for_cell(5), Some((1, 2)));
        assert_eq!(Board::coordinates_for_cell(8), Some((2, 2)));
        assert_eq!(Board::coordinates_for_cell(9), None);
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.cells().count(), Board::CELL_COUNT);
    }

    #[test]
    fn from_cells_is_row_major() {
        let board = Board::from([X, O, E, E, E, E, E, E, O]);
        assert_eq!(board.data[(0, 0)], X);
        assert_eq!(board.data[(0, 1)], O);
        assert_eq!(board.data[(2, 2)], O);
        assert_eq!(board.get(1), Some(O));
        assert_eq!(board.get(9), None);
        assert_eq!(board.cells().collect::<Vec<_>>(), vec![X, O, E, E, E, E, E, E, O]);
    }

    #[test]
    fn place() {
        let mut board = Board::new();
        assert_eq!(board.place(4, Player::X), Ok(()));
        assert_eq!(board.get(4), Some(X));

        assert_eq!(board.place(4, Player::O), Err(InvalidMove::FieldOccupied(4)));
        assert_eq!(board.get(4), Some(X), "occupied cell must not change");

        assert_eq!(board.place(9, Player::O), Err(InvalidMove::OutOfBounds(9)));
        assert_eq!(board.cells().filter(|field| !field.is_vacant()).count(), 1);
    }

    #[test]
    fn serializes_as_flat_list() {
        let board = Board::from([X, E, E, E, O, E, E, E, E]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"[{"occupied":{"player":"X"}},"vacant","vacant","vacant",{"occupied":{"player":"O"}},"vacant","vacant","vacant","vacant"]"#
        );
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let result = Board::try_from(vec![Field::Vacant; 8]);
        assert_eq!(
            result,
            Err(BoardShapeError {
                expected: 9,
                actual: 8
            })
        );
        assert!(serde_json::from_str::<Board>(r#"["vacant"]"#).is_err());
    }
}
