//! Players and their token arrays.
//!
//! A player couples an externally supplied session handle with an assigned
//! color and exactly four tokens.

use super::color::Color;
use super::geometry::TOKENS_PER_PLAYER;
use super::token::Token;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub handle: String,
    pub color: Color,
    pub tokens: [Token; TOKENS_PER_PLAYER],
}

impl Player {
    /// Creates a player with all four tokens at home.
    pub fn new(handle: impl Into<String>, color: Color) -> Self {
        Player {
            handle: handle.into(),
            color,
            tokens: [Token::new(color); TOKENS_PER_PLAYER],
        }
    }

    /// Track square where this player's tokens enter play.
    pub fn starting_square(&self) -> u8 {
        self.color.starting_square()
    }

    /// Track square from which this player's tokens turn into their lane.
    pub fn finish_square(&self) -> u8 {
        self.color.finish_square()
    }
}
