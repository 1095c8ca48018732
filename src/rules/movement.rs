//! Movement legality and the atomic move transition.
//!
//! `apply_move` is the sole gameplay state transition: it validates the
//! request against the current state and either applies the full move
//! (including any capture) or returns an error without touching anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::geometry::{next_square, FINISH_LANE_LENGTH};
use crate::board::state::GameState;
use crate::board::token::{Token, TokenId, TokenState};

use super::capture::{try_capture, CaptureEvent};

/// Reasons a move request is rejected. Rejections never mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no seated player has that handle")]
    UnknownPlayer,
    #[error("token index {0} is out of range")]
    TokenIndexOutOfRange(usize),
    #[error("token is at home and cannot be moved")]
    TokenAtHome,
    #[error("token is not inside its finish lane")]
    TokenNotInLane,
    #[error("token has already finished")]
    TokenFinished,
    #[error("path is blocked by a blockade at square {0}")]
    PathBlocked(u8),
}

/// Where a token ended up after a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Track(u8),
    FinishLane(u8),
    Finished,
    /// A lane advance whose modulus wrapped all the way to zero leaves the
    /// token at home. See [`advance_in_lane`].
    Home,
}

/// The result of a successful move, including any capture it caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub token: TokenId,
    pub destination: Destination,
    pub capture: Option<CaptureEvent>,
}

fn destination_of(token: &Token) -> Destination {
    match token.state() {
        TokenState::Finished => Destination::Finished,
        TokenState::InFinishLane => Destination::FinishLane(token.finish_position),
        TokenState::OnTrack => Destination::Track(token.position),
        TokenState::AtHome => Destination::Home,
    }
}

/// Checks that every square along the path is free of blockades.
///
/// The check covers squares 1 through `steps` from the token, destination
/// included. A blockade of any color blocks transit, the moving token's
/// own color included.
pub fn can_traverse(state: &GameState, from: u8, steps: u8) -> Result<(), MoveError> {
    for i in 1..=steps {
        let square = next_square(from, i);
        if state.has_blockade(square) {
            return Err(MoveError::PathBlocked(square));
        }
    }
    Ok(())
}

/// Walks the path and reports the step index at which `finish_square` is
/// reached, if it is reached strictly before the steps run out.
///
/// A token whose roll lands exactly on its finish square does not enter
/// the lane; it occupies the finish square as an ordinary track move.
pub fn squares_until_finish(from: u8, steps: u8, finish_square: u8) -> Option<u8> {
    for i in 1..steps {
        if next_square(from, i) == finish_square {
            return Some(i);
        }
    }
    None
}

/// Applies a move of `steps` squares to the identified token.
///
/// Follows the track/lane split: at-home and finished tokens are rejected,
/// lane tokens advance inside the lane, and track tokens traverse the
/// shared track, turning into their finish lane when their finish square
/// lies strictly inside the path.
pub fn apply_move(
    state: &mut GameState,
    id: TokenId,
    steps: u8,
) -> Result<MoveOutcome, MoveError> {
    let player = match state.player(id.player as usize) {
        Some(p) => p,
        None => return Err(MoveError::UnknownPlayer),
    };
    let finish_square = player.finish_square();
    let token = match player.tokens.get(id.token as usize) {
        Some(t) => *t,
        None => return Err(MoveError::TokenIndexOutOfRange(id.token as usize)),
    };

    match token.state() {
        TokenState::AtHome => Err(MoveError::TokenAtHome),
        TokenState::Finished => Err(MoveError::TokenFinished),
        TokenState::InFinishLane => {
            let remaining = token.finish_position as u16 + steps as u16;
            let destination = advance_in_lane(state, id, remaining)?;
            Ok(MoveOutcome {
                token: id,
                destination,
                capture: None,
            })
        }
        TokenState::OnTrack => {
            can_traverse(state, token.position, steps)?;

            if let Some(until) = squares_until_finish(token.position, steps, finish_square) {
                let destination = enter_finish_lane(state, id, steps, until)?;
                return Ok(MoveOutcome {
                    token: id,
                    destination,
                    capture: None,
                });
            }

            let dest = next_square(token.position, steps);
            let capture = try_capture(state, dest, token.color);
            match state.token_mut(id) {
                Some(t) => t.position = dest,
                None => return Err(MoveError::TokenIndexOutOfRange(id.token as usize)),
            }
            Ok(MoveOutcome {
                token: id,
                destination: Destination::Track(dest),
                capture,
            })
        }
    }
}

/// Moves a track token through its finish square into its private lane.
///
/// `squares_until_finish` steps reach the finish square and one more step
/// enters the lane at position 1; whatever is left of the roll advances
/// the token further inside the lane in the same action.
pub fn enter_finish_lane(
    state: &mut GameState,
    id: TokenId,
    steps: u8,
    squares_until_finish: u8,
) -> Result<Destination, MoveError> {
    debug_assert!(squares_until_finish < steps);
    let token = match state.token_mut(id) {
        Some(t) => t,
        None => return Err(MoveError::TokenIndexOutOfRange(id.token as usize)),
    };
    token.finish_position = 1;
    token.position = 0;

    let remaining = steps as u16 - squares_until_finish as u16 - 1;
    if remaining == 0 {
        return Ok(Destination::FinishLane(1));
    }
    advance_in_lane(state, id, remaining)
}

/// Advances a token inside its finish lane to `remaining` modulo
/// `FINISH_LANE_LENGTH + 2`.
///
/// The modulus lets a roll land exactly on the finished slot while an
/// overshoot wraps back toward the lane start instead of failing the
/// move. A wrap all the way to zero drops the token back to its home
/// state.
pub fn advance_in_lane(
    state: &mut GameState,
    id: TokenId,
    remaining: u16,
) -> Result<Destination, MoveError> {
    let token = match state.token_mut(id) {
        Some(t) => t,
        None => return Err(MoveError::TokenIndexOutOfRange(id.token as usize)),
    };
    if token.has_finished() {
        return Err(MoveError::TokenFinished);
    }
    if !token.is_in_finish_lane() {
        return Err(MoveError::TokenNotInLane);
    }

    token.finish_position = (remaining % (FINISH_LANE_LENGTH as u16 + 2)) as u8;
    Ok(destination_of(token))
}
