//! Shared game state for one Parchís session.
//!
//! Uses a fixed-size player array indexed by seat (equal to the color
//! discriminant) for O(1) lookup. This avoids heap allocation beyond the
//! player handles and keeps token identity as plain index pairs.

use super::color::Color;
use super::geometry::{MAX_PLAYERS, MAX_TOKENS_PER_SQUARE};
use super::player::Player;
use super::token::{Token, TokenId};

/// Complete game state: up to four seated players and their tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub players: [Option<Player>; MAX_PLAYERS],
}

impl GameState {
    /// Creates a state with no seated players.
    pub fn empty() -> Self {
        GameState::default()
    }

    /// Number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_some()).count()
    }

    /// Returns the player in the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)?.as_ref()
    }

    /// Returns the seat and player for the given handle.
    pub fn player_by_handle(&self, handle: &str) -> Option<(usize, &Player)> {
        self.players.iter().enumerate().find_map(|(seat, slot)| {
            slot.as_ref()
                .filter(|p| p.handle == handle)
                .map(|p| (seat, p))
        })
    }

    /// Returns the player holding the given color.
    pub fn player_by_color(&self, color: Color) -> Option<&Player> {
        self.players.iter().flatten().find(|p| p.color == color)
    }

    /// Resolves a token identity to the token, if the seat and slot exist.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.players
            .get(id.player as usize)?
            .as_ref()?
            .tokens
            .get(id.token as usize)
    }

    /// Mutable access to a token by identity.
    pub fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.players
            .get_mut(id.player as usize)?
            .as_mut()?
            .tokens
            .get_mut(id.token as usize)
    }

    /// Returns up to [`MAX_TOKENS_PER_SQUARE`] tokens currently on the
    /// shared track at `position`, in seat-then-token order.
    ///
    /// At most two tokens can legally share a square; occupancy beyond the
    /// cap indicates a broken invariant and is asserted in debug builds.
    /// Release builds keep the first two found.
    pub fn tokens_at(&self, position: u8) -> [Option<TokenId>; MAX_TOKENS_PER_SQUARE] {
        let mut found = [None; MAX_TOKENS_PER_SQUARE];
        let mut count = 0;
        for (seat, slot) in self.players.iter().enumerate() {
            let player = match slot {
                Some(p) => p,
                None => continue,
            };
            for (i, token) in player.tokens.iter().enumerate() {
                if !token.is_on_track() || token.position != position {
                    continue;
                }
                debug_assert!(
                    count < MAX_TOKENS_PER_SQUARE,
                    "more than {} tokens stacked on square {}",
                    MAX_TOKENS_PER_SQUARE,
                    position
                );
                if count == MAX_TOKENS_PER_SQUARE {
                    return found;
                }
                found[count] = Some(TokenId::new(seat as u8, i as u8));
                count += 1;
            }
        }
        found
    }

    /// Returns the color of the blockade at `position`, if the square
    /// holds a full stack of same-colored tokens.
    pub fn blockade_at(&self, position: u8) -> Option<Color> {
        let [first, second] = self.tokens_at(position);
        let first = self.token(first?)?;
        let second = self.token(second?)?;
        (first.color == second.color).then_some(first.color)
    }

    /// Returns true if `position` holds a blockade of any color.
    pub fn has_blockade(&self, position: u8) -> bool {
        self.blockade_at(position).is_some()
    }

    /// Places a token directly on a track square, clearing any lane state.
    /// Intended for game setup and tests; gameplay goes through the move
    /// operation. Returns false if the identity does not resolve.
    pub fn place_token(&mut self, id: TokenId, square: u8) -> bool {
        match self.token_mut(id) {
            Some(token) => {
                token.position = square;
                token.finish_position = 0;
                true
            }
            None => false,
        }
    }
}
