//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Lines are listed once, in the order the
//! winner scan visits them: rows, then columns, then the main diagonal and
//! the anti-diagonal.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::position::Position;
use crate::types::{Board, Outcome};
use tracing::instrument;

/// A row, column or diagonal.
pub type Line = [Position; 3];

/// The eight lines of the board, in scan order.
pub static LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Iterates over the lines passing through `pos`: its row, its column, and
/// whichever diagonals it lies on.
pub fn lines_through(pos: Position) -> impl Iterator<Item = &'static Line> {
    LINES.iter().filter(move |line| line.contains(&pos))
}

/// Evaluates the board: the first complete line wins, otherwise a full
/// board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
