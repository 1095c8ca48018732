//! Engine state management.
//!
//! Owns the game state for one session and exposes the session-facing
//! API: seating players, moving tokens, and reading snapshots. The engine
//! is a plain synchronous value; the caller serializes moves per game and
//! supplies dice and turn order itself.

use thiserror::Error;

use crate::board::color::{Color, ALL_COLORS};
use crate::board::geometry::{MAX_PLAYERS, TOKENS_PER_PLAYER};
use crate::board::player::Player;
use crate::board::state::GameState;
use crate::board::token::TokenId;
use crate::rules::movement::{apply_move, MoveError, MoveOutcome};
use crate::snapshot::{GameSnapshot, PlayerSnapshot};

/// Errors from seating players at game setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("a game seats at most 4 players, got {0}")]
    TooManyPlayers(usize),
    #[error("duplicate player handle {0:?}")]
    DuplicateHandle(String),
}

/// Rules engine for one Parchís session.
///
/// All gameplay mutation goes through [`Engine::move_token`]. Direct state
/// access is available for setup (placing entering tokens) and tests.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub state: GameState,
}

impl Engine {
    /// Creates an engine with no seated players.
    pub fn new() -> Self {
        Engine {
            state: GameState::empty(),
        }
    }

    /// Starts a fresh game, seating the given handles in color order:
    /// the first handle plays Yellow, the second Blue, and so on. Each
    /// player gets four tokens at home. Replaces any previous game.
    pub fn setup_game<S: AsRef<str>>(&mut self, handles: &[S]) -> Result<(), SetupError> {
        if handles.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if handles.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(handles.len()));
        }
        for (i, handle) in handles.iter().enumerate() {
            if handles[..i].iter().any(|h| h.as_ref() == handle.as_ref()) {
                return Err(SetupError::DuplicateHandle(handle.as_ref().to_string()));
            }
        }

        let mut state = GameState::empty();
        for (seat, handle) in handles.iter().enumerate() {
            state.players[seat] = Some(Player::new(handle.as_ref(), ALL_COLORS[seat]));
        }
        self.state = state;
        Ok(())
    }

    /// Moves the indexed token of the named player by `steps` squares.
    ///
    /// Returns the destination and any capture on success; on failure the
    /// game state is left exactly as it was.
    pub fn move_token(
        &mut self,
        handle: &str,
        token_index: usize,
        steps: u8,
    ) -> Result<MoveOutcome, MoveError> {
        let seat = match self.state.player_by_handle(handle) {
            Some((seat, _)) => seat,
            None => return Err(MoveError::UnknownPlayer),
        };
        if token_index >= TOKENS_PER_PLAYER {
            return Err(MoveError::TokenIndexOutOfRange(token_index));
        }
        apply_move(
            &mut self.state,
            TokenId::new(seat as u8, token_index as u8),
            steps,
        )
    }

    /// Returns true if the handle belongs to a seated player.
    pub fn is_playing(&self, handle: &str) -> bool {
        self.state.player_by_handle(handle).is_some()
    }

    /// Read access to the seated player with the given handle.
    pub fn player(&self, handle: &str) -> Option<&Player> {
        self.state.player_by_handle(handle).map(|(_, p)| p)
    }

    /// Read access to the seated player holding the given color.
    pub fn player_by_color(&self, color: Color) -> Option<&Player> {
        self.state.player_by_color(color)
    }

    /// Snapshot of the whole game for the presentation or network
    /// collaborator. The engine only produces the value; the caller
    /// packages and transmits it.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.state)
    }

    /// Snapshot of a single player's tokens.
    pub fn player_snapshot(&self, handle: &str) -> Option<PlayerSnapshot> {
        self.player(handle).map(PlayerSnapshot::of)
    }
}
