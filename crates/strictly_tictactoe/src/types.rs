//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// The human player (rendered as `X`).
    Challenger,
    /// The computer player (rendered as `O`).
    Opponent,
}

impl Mark {
    /// Returns the other mark.
    pub fn other(self) -> Self {
        match self {
            Mark::Challenger => Mark::Opponent,
            Mark::Opponent => Mark::Challenger,
        }
    }

    /// Glyph used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Mark::Challenger => 'X',
            Mark::Opponent => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Challenger => write!(f, "challenger"),
            Mark::Opponent => write!(f, "opponent"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Glyph used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Square::Empty => '-',
            Square::Occupied(mark) => mark.glyph(),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A line holds three of the same mark.
    Win(Mark),
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns true once the game can not continue.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "The {mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Error returned when a mark can not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for PlaceError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets every square back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `mark` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::CellOccupied`] if the square already holds a
    /// mark; the board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            debug!(?pos, "Square already occupied");
            return Err(PlaceError::CellOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Scans rows, then columns, then both diagonals for a winner, and
    /// falls back to draw detection.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

/// Renders the board as a grid with columns `A`-`C` and rows `1`-`3`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  A B C")?;
        for (row, line) in self.squares.chunks(3).enumerate() {
            write!(f, "{}", row + 1)?;
            for sq in line {
                write!(f, " {}", sq.glyph())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_square() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::Challenger).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::Challenger));
        assert_eq!(board.count(Mark::Challenger), 1);
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Opponent).unwrap();
        let before = board.clone();

        for mark in [Mark::Challenger, Mark::Opponent] {
            let err = board.place(Position::TopLeft, mark).unwrap_err();
            assert_eq!(err, PlaceError::CellOccupied(Position::TopLeft));
            assert_eq!(board, before);
            assert!(err.to_string().contains("occupied"));
        }
    }

    #[test]
    fn test_reset_clears_every_square() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Challenger).unwrap();
        board.place(Position::BottomRight, Mark::Opponent).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Win(Mark::Opponent).winner(), Some(Mark::Opponent));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_board_json_shape() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Challenger).unwrap();
        board.place(Position::Center, Mark::Opponent).unwrap();

        let json = serde_json::to_value(&board).unwrap();
        let squares = json["squares"].as_array().unwrap();
        assert_eq!(squares.len(), 9);
        assert_eq!(squares[0], serde_json::json!({ "Occupied": "challenger" }));
        assert_eq!(squares[1], "Empty");
        assert_eq!(squares[4], serde_json::json!({ "Occupied": "opponent" }));

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_outcome_json_shape() {
        assert_eq!(
            serde_json::to_value(Outcome::Win(Mark::Challenger)).unwrap(),
            serde_json::json!({ "Win": "challenger" })
        );
        assert_eq!(serde_json::to_value(Outcome::Draw).unwrap(), "Draw");
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Challenger).unwrap();
        board.place(Position::Center, Mark::Opponent).unwrap();
        assert_eq!(board.to_string(), "  A B C\n1 X - -\n2 - O -\n3 - - -");
    }
}
