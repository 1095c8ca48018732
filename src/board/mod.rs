//! Board representation and game-state types.
//!
//! Contains the static board geometry, player colors, tokens, players,
//! and the overall game state.

pub mod color;
pub mod geometry;
pub mod player;
pub mod state;
pub mod token;

pub use color::{Color, ALL_COLORS, COLOR_COUNT};
pub use geometry::{
    is_safe_square, next_square, FINISH_LANE_LENGTH, MAX_PLAYERS, MAX_TOKENS_PER_SQUARE,
    SAFE_SQUARES, START_OFFSET, START_SPACING, TOKENS_PER_PLAYER, TRACK_SIZE,
};
pub use player::Player;
pub use state::GameState;
pub use token::{Token, TokenId, TokenState};
