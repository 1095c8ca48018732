//! Capture resolution.
//!
//! A capture sends a single opposing track token back home. Safe squares
//! and blockaded squares are immune.

use serde::{Deserialize, Serialize};

use crate::board::color::Color;
use crate::board::geometry::is_safe_square;
use crate::board::state::GameState;
use crate::board::token::TokenId;

/// A token sent home by a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEvent {
    pub captured: TokenId,
    pub color: Color,
    pub square: u8,
}

/// Attempts a capture at the square a token is about to land on.
///
/// No-op on safe squares and on blockades. Otherwise the first occupant in
/// scan order is examined: an opposing-color token is sent home (its track
/// position reset to 0, lane state untouched); a same-color occupant is
/// left alone.
pub fn try_capture(state: &mut GameState, square: u8, moving_color: Color) -> Option<CaptureEvent> {
    if is_safe_square(square) || state.has_blockade(square) {
        return None;
    }

    let [first, _] = state.tokens_at(square);
    let id = first?;
    let color = state.token(id)?.color;
    if color == moving_color {
        return None;
    }

    if let Some(token) = state.token_mut(id) {
        token.position = 0;
    }

    Some(CaptureEvent {
        captured: id,
        color,
        square,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::ALL_COLORS;
    use crate::board::player::Player;
    use crate::board::token::TokenId;

    fn state_with(placements: &[(u8, u8, u8)]) -> GameState {
        let mut state = GameState::empty();
        for (seat, color) in ALL_COLORS.iter().enumerate() {
            state.players[seat] = Some(Player::new(format!("p{}", seat), *color));
        }
        for &(player, token, square) in placements {
            assert!(state.place_token(TokenId::new(player, token), square));
        }
        state
    }

    #[test]
    fn captures_single_opposing_token() {
        let mut state = state_with(&[(1, 0, 14)]);
        let event = try_capture(&mut state, 14, Color::Yellow).unwrap();
        assert_eq!(event.captured, TokenId::new(1, 0));
        assert_eq!(event.color, Color::Blue);
        assert_eq!(event.square, 14);
        assert!(state.token(TokenId::new(1, 0)).unwrap().is_at_home());
    }

    #[test]
    fn safe_square_is_immune() {
        let mut state = state_with(&[(1, 0, 12)]);
        assert!(try_capture(&mut state, 12, Color::Yellow).is_none());
        assert!(state.token(TokenId::new(1, 0)).unwrap().is_on_track());
    }

    #[test]
    fn blockade_is_immune() {
        let mut state = state_with(&[(1, 0, 14), (1, 1, 14)]);
        assert!(try_capture(&mut state, 14, Color::Yellow).is_none());
        assert!(state.token(TokenId::new(1, 0)).unwrap().is_on_track());
        assert!(state.token(TokenId::new(1, 1)).unwrap().is_on_track());
    }

    #[test]
    fn same_color_occupant_is_left_alone() {
        let mut state = state_with(&[(0, 0, 14)]);
        assert!(try_capture(&mut state, 14, Color::Yellow).is_none());
        assert!(state.token(TokenId::new(0, 0)).unwrap().is_on_track());
    }

    #[test]
    fn empty_square_is_a_no_op() {
        let mut state = state_with(&[]);
        assert!(try_capture(&mut state, 14, Color::Yellow).is_none());
    }
}
