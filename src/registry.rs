//! Room registry: one session per eligible room.
//!
//! Sessions are created on a room's first game and kept afterwards; ending
//! a game only marks the session inactive. Each session sits behind its own
//! mutex, so a challenger's move and the computer's reply are applied as one
//! unit while other rooms carry on undisturbed.

use crate::config::TicTacToeConfig;
use crate::error::GameError;
use crate::session::{GameReport, Session, SessionStatus};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use strictly_tictactoe::{Board, Position, ScoringMode};
use tracing::{debug, info, instrument, warn};

/// Opaque room identifier supplied by the host (a chat group, a channel...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Raw identifier.
    pub fn get(self) -> i64 {
        self.0
    }
}

type SharedSession = Arc<Mutex<Session>>;

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns every room's session.
///
/// Cloning is cheap and clones share the same sessions.
#[derive(Debug, Clone)]
pub struct Registry {
    label: Arc<str>,
    eligible: Arc<HashSet<RoomId>>,
    mode: ScoringMode,
    sessions: Arc<RwLock<HashMap<RoomId, SharedSession>>>,
}

impl Registry {
    /// Creates a registry allowing games in `rooms`.
    #[instrument(skip(rooms))]
    pub fn new(rooms: impl IntoIterator<Item = RoomId>) -> Self {
        Self::from_config(&TicTacToeConfig::new(rooms))
    }

    /// Creates a registry from configuration.
    #[instrument(skip(config), fields(label = %config.label()))]
    pub fn from_config(config: &TicTacToeConfig) -> Self {
        let eligible: HashSet<RoomId> = config.rooms().iter().copied().collect();
        info!(rooms = eligible.len(), scoring = ?config.scoring(), "Creating room registry");
        Self {
            label: config.label().into(),
            eligible: Arc::new(eligible),
            mode: *config.scoring(),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Checks the room against the allow-list.
    pub fn is_eligible(&self, room: RoomId) -> bool {
        self.eligible.contains(&room)
    }

    /// Starts a game in `room`, creating its session on first use.
    ///
    /// # Errors
    ///
    /// [`GameError::RoomNotEligible`] or [`GameError::AlreadyInProgress`].
    #[instrument(skip(self), fields(label = %self.label))]
    pub fn start_game(&self, room: RoomId) -> Result<GameReport, GameError> {
        self.check_eligible(room)?;
        let session = self.session_or_create(room);
        let report = lock(&session).start()?;
        Ok(report)
    }

    /// Plays the challenger's mark at `(row, col)` in `room`, followed by the
    /// computer's reply.
    ///
    /// # Errors
    ///
    /// [`GameError::RoomNotEligible`], [`GameError::NoActiveGame`] or
    /// [`GameError::CellOccupied`].
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..=2`.
    #[instrument(skip(self), fields(label = %self.label))]
    pub fn submit_move(&self, room: RoomId, row: usize, col: usize) -> Result<GameReport, GameError> {
        self.check_eligible(room)?;
        let pos = Position::at(row, col);
        let session = self.session(room).ok_or_else(|| {
            warn!("Move submitted in a room that never played");
            GameError::NoActiveGame
        })?;
        let report = lock(&session).submit_human_move(pos)?;
        Ok(report)
    }

    /// Ends the game in `room`. Returns whether one was running; a room
    /// that never played is not an error.
    ///
    /// # Errors
    ///
    /// [`GameError::RoomNotEligible`].
    #[instrument(skip(self), fields(label = %self.label))]
    pub fn end_game(&self, room: RoomId) -> Result<bool, GameError> {
        self.check_eligible(room)?;
        Ok(self.with_session(room, Session::end).unwrap_or(false))
    }

    /// Current board of `room`, if it ever played.
    pub fn board(&self, room: RoomId) -> Option<Board> {
        self.with_session(room, |session| session.board().clone())
    }

    /// Status of `room`; rooms that never played are inactive.
    pub fn status(&self, room: RoomId) -> SessionStatus {
        self.with_session(room, |session| session.status())
            .unwrap_or_default()
    }

    /// Rooms with a game running, sorted.
    #[instrument(skip(self))]
    pub fn active_rooms(&self) -> Vec<RoomId> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        let mut rooms: Vec<_> = sessions
            .iter()
            .filter(|(_, session)| lock(session).status() == SessionStatus::Active)
            .map(|(room, _)| *room)
            .collect();
        rooms.sort();
        debug!(count = rooms.len(), "Listed active rooms");
        rooms
    }

    /// Rooms allowed to play, sorted.
    pub fn eligible_rooms(&self) -> Vec<RoomId> {
        let mut rooms: Vec<_> = self.eligible.iter().copied().collect();
        rooms.sort();
        rooms
    }

    /// `name@version` of the configuration this registry was built from.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn check_eligible(&self, room: RoomId) -> Result<(), GameError> {
        if self.is_eligible(room) {
            Ok(())
        } else {
            warn!(%room, "Room not eligible");
            Err(GameError::RoomNotEligible(room))
        }
    }

    fn session(&self, room: RoomId) -> Option<SharedSession> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.get(&room).cloned()
    }

    fn with_session<T>(&self, room: RoomId, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let session = self.session(room)?;
        let mut guard = lock(&session);
        Some(f(&mut guard))
    }

    fn session_or_create(&self, room: RoomId) -> SharedSession {
        if let Some(session) = self.session(room) {
            return session;
        }
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(sessions.entry(room).or_insert_with(|| {
            info!(%room, "Creating session");
            Arc::new(Mutex::new(Session::new(self.mode)))
        }))
    }
}
