mod board;
mod evaluator;
mod field;
mod r#move;
mod outcome;
mod player;

pub use board::{Board, BoardShapeError, InvalidMove};
pub use evaluator::{check_matrix, evaluate};
pub use field::Field;
pub use outcome::Outcome;
pub use player::Player;
pub use r#move::{CellIndex, Coordinates, Move};
