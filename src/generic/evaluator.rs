use crate::{Board, Field, Outcome, Player};
use itertools::Itertools;
use ndarray::{s, Array2, ArrayView1};

/// Evaluates the outcome of a board.
///
/// See [`check_matrix`] for the order in which lines are checked.
pub fn evaluate(board: &Board) -> Outcome {
    check_matrix(&board.data)
}

/// Checks if a matrix of fields contains a winner
///
/// if one player has all fields in a row, column or diagonal, they win.
/// Lines are checked rows first (top to bottom), then columns (left to right),
/// then the main diagonal and finally the anti-diagonal. The first matching
/// line decides the winner.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe::{check_matrix, Field, Outcome, Player};
///
/// // O X X
/// // O O O <-- O wins
/// // X O X
/// let matrix = array![
///    [Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::X}, Field::Occupied{ player: Player::X}],
///    [Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::O}],
///    [Field::Occupied{ player: Player::X}, Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::X}],
/// ];
///
/// assert_eq!(check_matrix(&matrix), Outcome::Won{ winner: Player::O});
/// ```
pub fn check_matrix(matrix: &Array2<Field>) -> Outcome {
    let anti_diagonal = matrix.slice(s![.., ..;-1]);

    let winner = matrix
        .rows()
        .into_iter()
        .chain(matrix.columns())
        .chain([matrix.diag(), anti_diagonal.diag()])
        .find_map(get_winner_in_line);

    if let Some(winner) = winner {
        Outcome::Won { winner }
    } else if matrix.iter().all(|field| !field.is_vacant()) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Returns the player occupying every field of the line, if any.
fn get_winner_in_line(line: ArrayView1<'_, Field>) -> Option<Player> {
    match line.iter().all_equal_value() {
        Ok(Field::Occupied { player }) => Some(*player),
        _ => None,
    }
}
