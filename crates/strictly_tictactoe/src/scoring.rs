//! Per-square desirability scores used by the computer opponent.
//!
//! Every line through an empty square contributes to that square's score
//! according to what the line already holds:
//!
//! | line contents                  | contribution |
//! |--------------------------------|--------------|
//! | two opponent marks, one empty  | 10000        |
//! | two challenger marks, one empty| 1000         |
//! | one challenger mark, two empty | 10           |
//! | one opponent mark, two empty   | 5            |
//! | three empty                    | 2            |
//! | anything else                  | 0            |
//!
//! The spacing keeps "win now" above "block now" above everything else, no
//! matter how many weak lines add up on a single square.

use crate::position::Position;
use crate::rules::{Line, lines_through};
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Score every empty square starts from when the table is reset.
pub const BASELINE: u64 = 1;

/// Completing a line of our own.
pub const WIN_NOW: u64 = 10_000;
/// Blocking a line the challenger is about to complete.
pub const BLOCK_NOW: u64 = 1_000;
/// A line holding a single challenger mark.
pub const DEVELOP_DEFENCE: u64 = 10;
/// A line holding a single opponent mark.
pub const DEVELOP_ATTACK: u64 = 5;
/// An untouched line.
pub const OPEN_LINE: u64 = 2;

/// How the table is refreshed before each computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Contributions are added on top of the previous scores. Scores only
    /// drop back to the baseline when the game restarts.
    #[default]
    Accumulate,
    /// Every refresh starts again from the baseline.
    Fresh,
}

/// Contribution of a single line to each empty square on it.
pub fn line_contribution(board: &Board, line: &Line) -> u64 {
    let (mut challengers, mut opponents, mut empties) = (0, 0, 0);
    for pos in line {
        match board.get(*pos) {
            Square::Empty => empties += 1,
            Square::Occupied(Mark::Challenger) => challengers += 1,
            Square::Occupied(Mark::Opponent) => opponents += 1,
        }
    }

    match (challengers, opponents, empties) {
        (0, 2, 1) => WIN_NOW,
        (2, 0, 1) => BLOCK_NOW,
        (1, 0, 2) => DEVELOP_DEFENCE,
        (0, 1, 2) => DEVELOP_ATTACK,
        (0, 0, 3) => OPEN_LINE,
        _ => 0,
    }
}

/// Sum of the contributions of every line through `pos`.
pub fn square_contribution(board: &Board, pos: Position) -> u64 {
    lines_through(pos)
        .map(|line| line_contribution(board, line))
        .sum()
}

/// 3x3 table of desirability scores, one per square.
///
/// Occupied squares always score 0 after a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTable {
    scores: [u64; 9],
}

impl ScoringTable {
    /// Creates a table with every square at the baseline.
    pub fn new() -> Self {
        Self {
            scores: [BASELINE; 9],
        }
    }

    /// Puts every square back to the baseline.
    pub fn reset(&mut self) {
        self.scores = [BASELINE; 9];
    }

    /// Score of a square.
    pub fn get(&self, pos: Position) -> u64 {
        self.scores[pos.to_index()]
    }

    /// Scores in row-major order.
    pub fn scores(&self) -> &[u64; 9] {
        &self.scores
    }

    /// Refreshes the table against `board`.
    ///
    /// Occupied squares are forced to 0. Empty squares gain the sum of their
    /// line contributions, either on top of their current score
    /// ([`ScoringMode::Accumulate`]) or on top of the baseline
    /// ([`ScoringMode::Fresh`]).
    #[instrument(skip(self, board))]
    pub fn refresh(&mut self, board: &Board, mode: ScoringMode) {
        for pos in Position::ALL {
            let score = &mut self.scores[pos.to_index()];
            if !board.is_empty(pos) {
                *score = 0;
                continue;
            }
            let base = match mode {
                ScoringMode::Accumulate => *score,
                ScoringMode::Fresh => BASELINE,
            };
            *score = base.saturating_add(square_contribution(board, pos));
        }
        trace!(scores = ?self.scores, "Scoring table refreshed");
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::new()
    }
}
