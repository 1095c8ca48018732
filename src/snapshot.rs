//! Read-only state snapshots for presentation and transport.
//!
//! The engine never pushes state anywhere. After each move the session
//! collaborator reads a snapshot and is responsible for packaging and
//! transmitting it; no wire format is defined here beyond serde support.

use serde::{Deserialize, Serialize};

use crate::board::color::Color;
use crate::board::player::Player;
use crate::board::state::GameState;
use crate::board::token::{Token, TokenState};

/// One token's externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub position: u8,
    pub finish_position: u8,
    pub state: TokenState,
}

impl TokenSnapshot {
    pub fn of(token: &Token) -> Self {
        TokenSnapshot {
            position: token.position,
            finish_position: token.finish_position,
            state: token.state(),
        }
    }
}

/// One player's handle, color, and tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub handle: String,
    pub color: Color,
    pub tokens: Vec<TokenSnapshot>,
}

impl PlayerSnapshot {
    pub fn of(player: &Player) -> Self {
        PlayerSnapshot {
            handle: player.handle.clone(),
            color: player.color,
            tokens: player.tokens.iter().map(TokenSnapshot::of).collect(),
        }
    }
}

/// The whole game, players in seat order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
}

impl GameSnapshot {
    pub fn of(state: &GameState) -> Self {
        GameSnapshot {
            players: state.players.iter().flatten().map(PlayerSnapshot::of).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::token::TokenId;

    #[test]
    fn snapshot_reflects_token_positions() {
        let mut state = GameState::empty();
        state.players[0] = Some(Player::new("alice", Color::Yellow));
        state.players[1] = Some(Player::new("bob", Color::Blue));
        state.place_token(TokenId::new(1, 2), 30);

        let snapshot = GameSnapshot::of(&state);
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[0].handle, "alice");

        let token = &snapshot.players[1].tokens[2];
        assert_eq!(token.position, 30);
        assert_eq!(token.state, TokenState::OnTrack);
        assert_eq!(snapshot.players[1].tokens[0].state, TokenState::AtHome);
    }

    #[test]
    fn snapshot_skips_empty_seats() {
        let mut state = GameState::empty();
        state.players[2] = Some(Player::new("solo", Color::Red));

        let snapshot = GameSnapshot::of(&state);
        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(snapshot.players[0].color, Color::Red);
    }
}
