//! Static geometry of the standard Parchís board.
//!
//! The shared track has 68 squares numbered 1..=68; position 0 is reserved
//! to mean "at home". Each color additionally owns a private 7-square
//! finish lane reached through its own finish square.

/// Number of squares on the shared circular track.
pub const TRACK_SIZE: u8 = 68;

/// Squares in a player's private finish lane before the finished state.
pub const FINISH_LANE_LENGTH: u8 = 7;

/// Distance between consecutive colors' starting squares.
pub const START_SPACING: u8 = 17;

/// Offset from a color's base position to its actual entry square.
pub const START_OFFSET: u8 = 5;

/// Tokens owned by each player.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Maximum number of seated players in one game.
pub const MAX_PLAYERS: usize = 4;

/// Tokens that may share one track square. A same-color pair is a blockade.
pub const MAX_TOKENS_PER_SQUARE: usize = 2;

/// Track squares where captures cannot occur.
pub const SAFE_SQUARES: [u8; 12] = [5, 12, 17, 22, 29, 34, 39, 46, 51, 56, 63, 68];

/// Returns true if the given track square is a safe square.
pub fn is_safe_square(position: u8) -> bool {
    SAFE_SQUARES.contains(&position)
}

/// Advances `steps` squares around the circular track.
///
/// Track numbering is 1-based, so the wraparound lands on square 1 rather
/// than 0: the result is in `1..=TRACK_SIZE` for any number of steps.
/// The starting position must itself be on the track.
pub fn next_square(position: u8, steps: u8) -> u8 {
    debug_assert!(
        (1..=TRACK_SIZE).contains(&position),
        "next_square called with off-track position {}",
        position
    );
    let zero_based = (position as u16 - 1 + steps as u16) % TRACK_SIZE as u16;
    (zero_based + 1) as u8
}
