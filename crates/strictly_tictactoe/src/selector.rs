//! Move selection for the computer opponent.

use crate::position::Position;
use crate::scoring::{ScoringMode, ScoringTable};
use crate::types::Board;
use tracing::{debug, instrument};

/// Refreshes `table` against `board` and picks the best square.
///
/// Squares are scanned in row-major order and a square is only taken when
/// its score is strictly greater than the best seen so far (starting from
/// 0), so the earliest square wins ties. Returns `None` when no square
/// scores above 0, which only happens on a full board.
#[instrument(skip(board, table))]
pub fn select_move(board: &Board, table: &mut ScoringTable, mode: ScoringMode) -> Option<Position> {
    table.refresh(board, mode);

    let mut best = None;
    let mut max = 0;
    for pos in Position::ALL {
        let score = table.get(pos);
        if score > max {
            max = score;
            best = Some(pos);
        }
    }

    debug!(choice = ?best, score = max, "Selected move");
    best
}
