//! Error types for the room engine.

use crate::registry::RoomId;
use derive_more::{Display, Error};
use strictly_tictactoe::{PlaceError, Position};
use tracing::instrument;

/// Why a game command was rejected.
///
/// None of these change any state; the host decides what to tell the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameError {
    /// The room is not in the configured allow-list.
    #[display("Room {} is not enabled for tic-tac-toe", _0)]
    RoomNotEligible(RoomId),

    /// A game is already running in the room.
    #[display("A game is already in progress")]
    AlreadyInProgress,

    /// The room has no running game.
    #[display("No game is in progress")]
    NoActiveGame,

    /// The requested square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for GameError {}

impl From<PlaceError> for GameError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::CellOccupied(pos) => GameError::CellOccupied(pos),
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
