//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line, in scan order, holding three
/// of the same mark; `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(mark);
        }
    }

    None
}
