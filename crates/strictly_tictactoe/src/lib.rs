//! Pure tic-tac-toe game logic.
//!
//! - [`Board`]: the 3x3 grid, placement and win/draw evaluation
//! - [`ScoringTable`]: per-square desirability used by the computer opponent
//! - [`select_move`]: picks the computer's reply from the scoring table
//!
//! Nothing here does I/O or locking; callers own the state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
mod scoring;
mod selector;
mod types;

// Crate-level exports - Board and marks
pub use position::Position;
pub use types::{Board, Mark, Outcome, PlaceError, Square};

// Crate-level exports - Computer opponent
pub use scoring::{
    BASELINE, BLOCK_NOW, DEVELOP_ATTACK, DEVELOP_DEFENCE, OPEN_LINE, ScoringMode, ScoringTable,
    WIN_NOW, line_contribution, square_contribution,
};
pub use selector::select_move;
