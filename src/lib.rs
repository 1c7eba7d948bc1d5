//! Strictly Rooms - per-room tic-tac-toe against a computer opponent
//!
//! A host (typically a chat bot) owns message parsing and rendering; this
//! library owns the games.
//!
//! # Architecture
//!
//! - **Registry**: one session per eligible room, each behind its own lock
//! - **Session**: start / move / end state machine for a single room
//! - **Game logic**: board, rules and the scoring-table opponent live in
//!   [`strictly_tictactoe`]
//!
//! # Example
//!
//! ```
//! use strictly_rooms::{Outcome, Registry, RoomId};
//!
//! # fn example() -> Result<(), strictly_rooms::GameError> {
//! let room = RoomId::from(1001);
//! let registry = Registry::new([room]);
//!
//! registry.start_game(room)?;
//! let report = registry.submit_move(room, 0, 0)?;
//! assert_eq!(*report.outcome(), Outcome::InProgress);
//! println!("{}", report.board());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod registry;
mod session;

// Crate-level exports - Configuration
pub use config::{Config, TicTacToeConfig};

// Crate-level exports - Errors
pub use error::{ConfigError, GameError};

// Crate-level exports - Rooms and sessions
pub use registry::{Registry, RoomId};
pub use session::{GameReport, Session, SessionStatus};

// Crate-level exports - Game types (tic-tac-toe)
pub use strictly_tictactoe::{
    Board, Mark, Outcome, PlaceError, Position, ScoringMode, ScoringTable, Square,
};
