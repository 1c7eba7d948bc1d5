//! Per-room game session: one board, one scoring table, one status.

use crate::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Mark, Outcome, Position, ScoringMode, ScoringTable, select_move};
use tracing::{debug, info, instrument, warn};

/// Whether a room currently has a game running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// A game is running and accepts moves.
    Active,
    /// No game is running.
    #[default]
    Inactive,
}

/// What the host needs to render after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameReport {
    /// Board after the operation.
    board: Board,
    /// Outcome of that board.
    outcome: Outcome,
    /// Square the computer played this turn, if it played.
    reply: Option<Position>,
}

impl GameReport {
    fn new(board: Board, outcome: Outcome, reply: Option<Position>) -> Self {
        Self {
            board,
            outcome,
            reply,
        }
    }
}

/// A single room's game.
///
/// A new session is [`SessionStatus::Inactive`] with a cleared board; call
/// [`Session::start`] to begin playing.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    scores: ScoringTable,
    status: SessionStatus,
    mode: ScoringMode,
}

impl Session {
    /// Creates an idle session whose computer opponent uses `mode`.
    #[instrument]
    pub fn new(mode: ScoringMode) -> Self {
        Self {
            board: Board::new(),
            scores: ScoringTable::new(),
            status: SessionStatus::Inactive,
            mode,
        }
    }

    /// Starts a new game on a cleared board.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyInProgress`] if a game is running; the board is
    /// left as it was.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<GameReport, GameError> {
        if self.status == SessionStatus::Active {
            warn!("Start requested while a game is running");
            return Err(GameError::AlreadyInProgress);
        }

        self.board.reset();
        self.scores.reset();
        self.status = SessionStatus::Active;
        info!("Game started");

        Ok(GameReport::new(self.board.clone(), Outcome::InProgress, None))
    }

    /// Plays one round: the challenger's mark at `pos`, then the computer's
    /// reply unless the challenger's move ended the game.
    ///
    /// # Errors
    ///
    /// [`GameError::NoActiveGame`] if no game is running, and
    /// [`GameError::CellOccupied`] if `pos` is taken. Neither changes the
    /// session.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, pos: Position) -> Result<GameReport, GameError> {
        if self.status != SessionStatus::Active {
            warn!("Move submitted with no game running");
            return Err(GameError::NoActiveGame);
        }

        self.board.place(pos, Mark::Challenger).map_err(|e| {
            warn!(error = %e, "Invalid move");
            GameError::from(e)
        })?;

        let outcome = self.board.evaluate();
        if outcome.is_terminal() {
            return Ok(self.finish(outcome, None));
        }

        let reply = select_move(&self.board, &mut self.scores, self.mode);
        match reply {
            Some(reply) => {
                // The selector only returns empty squares, so this never
                // fails and the round is never left half-applied.
                debug_assert!(self.board.is_empty(reply), "selector chose {reply}");
                self.board.place(reply, Mark::Opponent)?;
                debug!(?reply, "Computer replied");
            }
            None => warn!("Computer found no move"),
        }

        let outcome = self.board.evaluate();
        if outcome.is_terminal() {
            Ok(self.finish(outcome, reply))
        } else {
            Ok(GameReport::new(self.board.clone(), outcome, reply))
        }
    }

    /// Ends the game. Returns whether one was running.
    #[instrument(skip(self))]
    pub fn end(&mut self) -> bool {
        let was_active = self.status == SessionStatus::Active;
        self.status = SessionStatus::Inactive;
        if was_active {
            info!("Game ended");
        }
        was_active
    }

    fn finish(&mut self, outcome: Outcome, reply: Option<Position>) -> GameReport {
        self.status = SessionStatus::Inactive;
        info!(%outcome, winner = ?outcome.winner(), "Game over");
        GameReport::new(self.board.clone(), outcome, reply)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Current scoring table.
    pub fn scores(&self) -> &ScoringTable {
        &self.scores
    }

    /// Scoring mode of the computer opponent.
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScoringMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Session {
        let mut session = Session::default();
        session.start().unwrap();
        session
    }

    #[test]
    fn test_new_session_is_inactive() {
        let session = Session::default();
        assert_eq!(session.status(), SessionStatus::Inactive);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_start_twice_keeps_board() {
        let mut session = started();
        session.submit_human_move(Position::TopLeft).unwrap();
        let before = session.board().clone();

        assert_eq!(session.start(), Err(GameError::AlreadyInProgress));
        assert_eq!(session.board(), &before);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn test_move_without_game() {
        let mut session = Session::default();
        assert_eq!(
            session.submit_human_move(Position::Center),
            Err(GameError::NoActiveGame)
        );
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_occupied_square_does_not_consume_round() {
        let mut session = started();
        let report = session.submit_human_move(Position::TopLeft).unwrap();
        assert_eq!(*report.reply(), Some(Position::Center));
        let scores = session.scores().clone();

        for taken in [Position::TopLeft, Position::Center] {
            assert_eq!(
                session.submit_human_move(taken),
                Err(GameError::CellOccupied(taken))
            );
        }
        assert_eq!(session.board(), report.board());
        assert_eq!(session.scores(), &scores);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn test_restart_resets_scores() {
        let mut session = started();
        session.submit_human_move(Position::TopLeft).unwrap();
        session.end();

        let report = session.start().unwrap();
        assert_eq!(report.board(), &Board::new());
        assert_eq!(session.scores(), &ScoringTable::new());
    }

    #[test]
    fn test_mode_is_kept_across_games() {
        let mut session = Session::new(ScoringMode::Fresh);
        session.start().unwrap();
        session.end();
        session.start().unwrap();
        assert_eq!(session.mode(), ScoringMode::Fresh);
        assert_eq!(Session::default().mode(), ScoringMode::Accumulate);
    }

    #[test]
    fn test_every_reply_lands_on_empty_square() {
        let mut session = started();
        let mut report = session.submit_human_move(Position::TopLeft).unwrap();
        while *report.outcome() == Outcome::InProgress {
            let before = report.board().clone();
            let pos = Position::ALL
                .into_iter()
                .find(|pos| before.is_empty(*pos))
                .unwrap();
            report = session.submit_human_move(pos).unwrap();
            if let Some(reply) = *report.reply() {
                assert!(before.is_empty(reply));
                assert_ne!(reply, pos);
            }
            let diff = report.board().count(Mark::Challenger) as isize
                - report.board().count(Mark::Opponent) as isize;
            assert!((0..=1).contains(&diff));
        }
        assert_eq!(session.status(), SessionStatus::Inactive);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut session = started();
        assert!(session.end());
        assert!(!session.end());
        assert_eq!(session.status(), SessionStatus::Inactive);
    }
}
